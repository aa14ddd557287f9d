//! Currency reference data.
//!
//! The table combines data from
//!
//! * https://gist.github.com/Fluidbyte/2973986
//! * https://en.wikipedia.org/wiki/ISO_4217
//! * http://www.iotafinance.com/en/ISO-4217-Currency-Codes.html
//! * http://www.xe.com/symbols.php
//!
//! covering active ISO 4217 currencies, withdrawn pre-Euro national
//! currencies, precious metals and fund codes. Records are never mutated;
//! the derived symbol sets are built once on first use.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// A single currency reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyRecord {
    /// ISO 4217-style code (includes withdrawn and fund codes).
    pub code: &'static str,
    /// Primary symbol.
    pub symbol: &'static str,
    /// Symbol used in the currency's home locale.
    pub native_symbol: &'static str,
    /// Additional symbols seen in the wild.
    pub other_symbols: &'static [&'static str],
}

const fn c(
    code: &'static str,
    symbol: &'static str,
    native_symbol: &'static str,
    other_symbols: &'static [&'static str],
) -> CurrencyRecord {
    CurrencyRecord {
        code,
        symbol,
        native_symbol,
        other_symbols,
    }
}

/// The full currency reference table.
pub static CURRENCIES: &[CurrencyRecord] = &[
    c("AED", "AED", "د.إ.\u{200f}", &[]),
    c("AFN", "Af", "؋", &[]),
    c("ALL", "ALL", "Lek", &[]),
    c("AMD", "AMD", "դր.", &[]),
    c("ANG", "ƒ", "ƒ", &[]),
    c("AOA", "Kz", "Kz", &[]),
    c("ARS", "AR$", "$", &[]),
    c("AUD", "AU$", "$", &[]),
    c("AWG", "ƒ", "ƒ", &[]),
    c("AFL", "Afl.", "Afl.", &[]),
    c("AZN", "man.", "ман.", &[]),
    c("BAM", "KM", "KM", &[]),
    c("BDT", "Tk", "৳", &[]),
    c("BBD", "Bds$", "$", &[]),
    c("BGN", "BGN", "лв.", &[]),
    c("BHD", "BD", "د.ب.\u{200f}", &[]),
    c("BIF", "FBu", "FBu", &[]),
    c("BSD", "$", "$", &[]),
    c("BMD", "$", "$", &[]),
    c("BND", "BN$", "$", &[]),
    c("BOB", "Bs", "Bs", &[]),
    c("BOV", "-", "-", &[]),
    c("BRL", "R$", "R$", &[]),
    c("BTN", "Nu.", "Nu.", &[]),
    c("BWP", "BWP", "P", &[]),
    c("BYN", "Br", "Br", &[]),
    c("BZD", "BZ$", "$", &[]),
    c("CAD", "CA$", "$", &[]),
    c("CDF", "CDF", "FrCD", &[]),
    c("CHE", "-", "-", &[]),
    c("CHF", "CHF", "CHF", &["Fr."]),
    c("CHW", "-", "-", &[]),
    c("CLF", "UF", "UF", &[]),
    c("CLP", "CL$", "$", &[]),
    c("CNY", "CN¥", "CN¥", &[]),
    c("COP", "CO$", "$", &[]),
    c("COU", "-", "-", &[]),
    c("CRC", "₡", "₡", &[]),
    c("CUC", "CUC$", "$", &[]),
    c("CUP", "₱", "₱", &[]),
    c("CVE", "CV$", "CV$", &[]),
    c("CZK", "Kč", "Kč", &[]),
    c("DJF", "Fdj", "Fdj", &[]),
    c("DKK", "Dkr", "kr", &[]),
    c("DOP", "RD$", "RD$", &[]),
    c("DZD", "DA", "د.ج.\u{200f}", &[]),
    c("EEK", "kr", "kroon", &[]),
    c("EGP", "EGP", "ج.م.\u{200f}", &[]),
    c("ERN", "Nfk", "Nfk", &[]),
    c("ETB", "Br", "Br", &[]),
    c("EUR", "€", "€", &[]),
    c("FJD", "$", "$", &[]),
    c("FKP", "£", "£", &[]),
    c("GBP", "£", "£", &[]),
    c("GEL", "GEL", "GEL", &[]),
    c("GGP", "£", "£", &[]),
    c("GHS", "GH₵", "GH₵", &[]),
    c("GIP", "£", "£", &[]),
    c("GMD", "D", "D", &[]),
    c("GNF", "FG", "FG", &[]),
    c("GTQ", "GTQ", "Q", &[]),
    c("GYD", "$", "$", &[]),
    c("HKD", "HK$", "$", &[]),
    c("HNL", "HNL", "L", &[]),
    c("HRK", "kn", "kn", &[]),
    c("HTG", "G", "G", &[]),
    c("HUF", "Ft", "Ft", &[]),
    c("IDR", "Rp", "Rp", &[]),
    c("ILS", "₪", "₪", &[]),
    c("IMP", "£", "£", &[]),
    c("INR", "Rs", "টকা", &["₹", "र"]),
    c("IQD", "IQD", "د.ع.\u{200f}", &[]),
    c("IRR", "IRR", "﷼", &["ریال"]),
    c("ISK", "Ikr", "kr", &[]),
    c("JEP", "£", "£", &[]),
    c("JMD", "J$", "$", &[]),
    c("JOD", "JD", "د.أ.\u{200f}", &[]),
    c("JPY", "¥", "￥", &["円"]),
    c("KES", "Ksh", "Ksh", &[]),
    c("KGS", "лв", "лв", &[]),
    c("KHR", "KHR", "៛", &[]),
    c("KMF", "CF", "FC", &[]),
    c("KPW", "₩", "원", &[]),
    c("KRW", "₩", "원", &[]),
    c("KWD", "KD", "د.ك.\u{200f}", &[]),
    c("KYD", "$", "$", &[]),
    c("KZT", "KZT", "тңг.", &[]),
    c("LAK", "₭", "₭", &[]),
    c("LBP", "LB£", "ل.ل.\u{200f}", &[]),
    c("LKR", "SLRs", "SL Re", &[]),
    c("LRD", "$", "$", &[]),
    c("LSL", "L", "L", &[]),
    c("LTL", "Lt", "LTL", &["litų"]),
    c("LVL", "Ls", "LVL", &[]),
    c("LYD", "LD", "د.ل.\u{200f}", &[]),
    c("MAD", "MAD", "د.م.\u{200f}", &[]),
    c("MDL", "MDL", "MDL", &[]),
    c("MGA", "MGA", "MGA", &[]),
    c("MKD", "MKD", "MKD", &[]),
    c("MMK", "MMK", "K", &[]),
    c("MNT", "₮", "₮", &[]),
    c("MOP", "MOP$", "MOP$", &[]),
    c("MRO", "UM", "UM", &[]),
    c("MUR", "MURs", "MURs", &[]),
    c("MVR", "MRf", "Rf", &[]),
    c("MWK", "MK", "MK", &[]),
    c("MXN", "MX$", "$", &[]),
    c("MXV", "-", "-", &[]),
    c("MYR", "RM", "RM", &[]),
    c("MZN", "MTn", "MTn", &[]),
    c("NAD", "N$", "N$", &[]),
    c("NGN", "₦", "₦", &[]),
    c("NIO", "C$", "C$", &[]),
    c("NOK", "Nkr", "kr", &[]),
    c("NPR", "NPRs", "नेरू", &[]),
    c("PRB", "руб", "руб", &[]),
    c("NZD", "NZ$", "$", &[]),
    c("OMR", "OMR", "ر.ع.\u{200f}", &[]),
    c("PAB", "B/.", "B/.", &[]),
    c("PEN", "S/.", "S/.", &[]),
    c("PGK", "K", "K", &[]),
    c("PHP", "₱", "₱", &[]),
    c("PKR", "PKRs", "₨", &[]),
    c("PLN", "zł", "zł", &["pln"]),
    c("PYG", "₲", "₲", &[]),
    c("QAR", "QR", "ر.ق.\u{200f}", &[]),
    c("RON", "RON", "RON", &["lei", "leu", "Lei", "LEI"]),
    c("RSD", "din.", "дин.", &[]),
    c("RUB", "RUB", "руб.", &[]),
    c("RWF", "RWF", "FR", &[]),
    c("SAR", "SR", "ر.س.\u{200f}", &[]),
    c("SBD", "$", "$", &[]),
    c("SCR", "₨", "₨", &[]),
    c("SDG", "SDG", "SDG", &[]),
    c("SEK", "Skr", "kr", &[]),
    c("SGD", "S$", "$", &[]),
    c("SHP", "£", "£", &[]),
    c("SLL", "Le", "Le", &[]),
    c("SOS", "Ssh", "Ssh", &[]),
    c("SRD", "$", "$", &[]),
    c("SSP", "SSP", "SSP", &[]),
    c("STD", "Db", "Db", &[]),
    c("SVC", "$", "$", &[]),
    c("SYP", "SY£", "ل.س.\u{200f}", &[]),
    c("SZL", "L", "L", &[]),
    c("THB", "฿", "฿", &[]),
    c("TJS", "-", "-", &[]),
    c("TMT", "T", "T", &[]),
    c("TND", "DT", "د.ت.\u{200f}", &[]),
    c("TOP", "T$", "T$", &[]),
    c("TRY", "TL", "TL", &[]),
    c("TTD", "TT$", "$", &[]),
    c("TVD", "$", "$", &[]),
    c("TWD", "NT$", "NT$", &[]),
    c("TZS", "TSh", "TSh", &[]),
    c("UAH", "₴", "₴", &[]),
    c("UGX", "USh", "USh", &[]),
    c("USD", "$", "$", &[]),
    c("USN", "$", "$", &[]),
    c("UYI", "UYI", "UYI", &[]),
    c("UYU", "$U", "$", &[]),
    c("UZS", "UZS", "UZS", &[]),
    c("VEF", "Bs.F.", "Bs.F.", &[]),
    c("VND", "₫", "₫", &["đ"]),
    c("VUV", "VT", "VT", &[]),
    c("WST", "WS$", "$", &[]),
    c("XAF", "FCFA", "FCFA", &[]),
    c("XAG", "XAG", "XAG", &[]),
    c("XAU", "XAU", "XAU", &[]),
    c("XBA", "XBA", "XBA", &[]),
    c("XBB", "XBB", "XBB", &[]),
    c("XBC", "XBC", "XBC", &[]),
    c("XBD", "XBD", "XBD", &[]),
    c("XCD", "$", "$", &[]),
    c("XDR", "XDR", "XDR", &[]),
    c("XOF", "CFA", "CFA", &[]),
    c("XPD", "XPD", "XPD", &[]),
    c("XPF", "CFP", "CFP", &[]),
    c("XPT", "XPT", "XPT", &[]),
    c("XSU", "Sucre", "Sucre", &[]),
    c("XTS", "XTS", "XTS", &[]),
    c("XUA", "XUA", "XUA", &[]),
    c("XXX", "XXX", "XXX", &[]),
    c("YER", "YR", "ر.ي.\u{200f}", &[]),
    c("ZAR", "R", "R", &[]),
    c("ZMK", "ZK", "ZK", &[]),
    c("ZMW", "ZK", "ZK", &[]),
    c("ZWD", "Z$", "Z$", &[]),
    c("ZWL", "$", "$", &[]),
    c("NTD", "NT$", "NT$", &[]),
    c("RMB", "CN¥", "CN¥", &[]),
    c("ATS", "öS", "öS", &[]),
    c("BEF", "fr.", "fr.", &[]),
    c("CYP", "CYP", "£", &[]),
    c("DEM", "DM", "D-Mark", &[]),
    c("NLG", "fl.", "ƒ", &[]),
    c("FIM", "FIM", "mk.", &[]),
    c("FRF", "F", "₣", &[]),
    c("GRD", "GRD", "Δρχ.", &["Δρ.", "₯"]),
    c("IEP", "IR£", "£", &[]),
    c("ITL", "L", "₤", &[]),
    c("LUF", "F", "LUF", &[]),
    c("MTL", "Lm", "₤", &[]),
    c("PTE", "$", "$", &[]),
    c("SKK", "SKK", "Sk", &[]),
    c("SIT", "SIT", "SIT", &["tolarjev"]),
    c("ESP", "Pta", "Ptas", &["₧", "Pts", "Pt"]),
    c("VAL", "£", "₤", &[]),
];

lazy_static! {
    /// All currency codes, in table order.
    pub static ref CURRENCY_CODES: Vec<&'static str> =
        CURRENCIES.iter().map(|c| c.code).collect();

    /// All primary symbols, deduplicated.
    pub static ref CURRENCY_SYMBOLS: Vec<&'static str> = {
        let set: HashSet<&'static str> = CURRENCIES.iter().map(|c| c.symbol).collect();
        let mut symbols: Vec<_> = set.into_iter().collect();
        symbols.sort_unstable();
        symbols
    };

    /// All native and alternate symbols, deduplicated.
    pub static ref CURRENCY_NATIONAL_SYMBOLS: Vec<&'static str> = {
        let set: HashSet<&'static str> = CURRENCIES
            .iter()
            .map(|c| c.native_symbol)
            .chain(CURRENCIES.iter().flat_map(|c| c.other_symbols.iter().copied()))
            .collect();
        let mut symbols: Vec<_> = set.into_iter().collect();
        symbols.sort_unstable();
        symbols
    };
}
