//! Static timezone-abbreviation reference data.
//!
//! An abbreviation alone is ambiguous (CST is North America, China, and
//! Cuba); when several zones share one, the entry whose UTC offset is
//! nearest the caller's configured offset wins.

use thiserror::Error;

/// A human-readable zone label for an abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzLabel {
    pub abbreviation: &'static str,
    pub full: &'static str,
    pub utc_offset: i32,
}

#[derive(Debug, Error)]
#[error("abbreviation {0:?} does not exist in the lookup table")]
pub struct UnknownAbbreviation(pub String);

/// Resolve an abbreviation to its full zone label.
///
/// When the abbreviation maps to more than one zone, the candidate with the
/// smallest absolute offset difference from `utc_offset` is returned.
pub fn lookup_full_tz(abbrev: &str, utc_offset: i32) -> Result<TzLabel, UnknownAbbreviation> {
    let candidates = TZ_ABBREVS_TABLE
        .iter()
        .find(|(key, _)| *key == abbrev)
        .map(|(_, labels)| *labels)
        .ok_or_else(|| UnknownAbbreviation(abbrev.to_string()))?;

    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if (utc_offset - candidate.utc_offset).abs() < (utc_offset - best.utc_offset).abs() {
            best = *candidate;
        }
    }
    Ok(best)
}

const fn tz(abbreviation: &'static str, full: &'static str, utc_offset: i32) -> TzLabel {
    TzLabel {
        abbreviation,
        full,
        utc_offset,
    }
}

// https://en.wikipedia.org/wiki/List_of_time_zone_abbreviations
static TZ_ABBREVS_TABLE: &[(&str, &[TzLabel])] = &[
    ("ACDT", &[tz("ACDT", "Australian Central Daylight Saving Time", 10)]),
    ("ACST", &[tz("ACST", "Australian Central Standard Time", 9)]),
    ("ACT", &[tz("ACT", "Acre Time", -5)]),
    ("ACWST", &[tz("ACWST", "Australian Central Western Standard Time (unofficial)", 8)]),
    ("ADT", &[tz("ADT", "Atlantic Daylight Time", -3)]),
    ("AEDT", &[tz("AEDT", "Australian Eastern Daylight Saving Time", 11)]),
    ("AEST", &[tz("AEST", "Australian Eastern Standard Time", 10)]),
    ("AET", &[tz("AET", "Australian Eastern Time", 10)]),
    ("AFT", &[tz("AFT", "Afghanistan Time", 4)]),
    ("AKDT", &[tz("AKDT", "Alaska Daylight Time", -8)]),
    ("AKST", &[tz("AKST", "Alaska Standard Time", -9)]),
    ("ALMT", &[tz("ALMT", "Alma-Ata Time", 6)]),
    ("AMST", &[tz("AMST", "Amazon Summer Time (Brazil)", -3)]),
    ("AMT", &[tz("AMT", "Amazon Time (Brazil)", -4), tz("AMT", "Armenia Time", 4)]),
    ("ANAT", &[tz("ANAT", "Anadyr Time", 12)]),
    ("AQTT", &[tz("AQTT", "Aqtobe Time", 5)]),
    ("ART", &[tz("ART", "Argentina Time", -3)]),
    ("AST", &[tz("AST", "Arabia Standard Time", 3), tz("AST", "Atlantic Standard Time", -4)]),
    ("AWST", &[tz("AWST", "Australian Western Standard Time", 8)]),
    ("AZOST", &[tz("AZOST", "Azores Summer Time", 0)]),
    ("AZOT", &[tz("AZOT", "Azores Standard Time", -1)]),
    ("AZT", &[tz("AZT", "Azerbaijan Time", 4)]),
    ("BNT", &[tz("BNT", "Brunei Time", 8)]),
    ("BIOT", &[tz("BIOT", "British Indian Ocean Time", 6)]),
    ("BIT", &[tz("BIT", "Baker Island Time", -12)]),
    ("BOT", &[tz("BOT", "Bolivia Time", -4)]),
    ("BRST", &[tz("BRST", "Brasília Summer Time", -2)]),
    ("BRT", &[tz("BRT", "Brasília Time", -3)]),
    ("BST", &[tz("BST", "Bangladesh Standard Time", 6), tz("BST", "Bougainville Standard Time", 11)]),
    ("BTT", &[tz("BTT", "Bhutan Time", 6)]),
    ("CAT", &[tz("CAT", "Central Africa Time", 2)]),
    ("CCT", &[tz("CCT", "Cocos Islands Time", 6)]),
    ("CDT", &[tz("CDT", "Central Daylight Time (North America)", -5), tz("CDT", "Cuba Daylight Time", -4)]),
    ("CEST", &[tz("CEST", "Central European Summer Time (Cf. HAEC)", 2)]),
    ("CET", &[tz("CET", "Central European Time", 1)]),
    ("CHADT", &[tz("CHADT", "Chatham Daylight Time", 13)]),
    ("CHAST", &[tz("CHAST", "Chatham Standard Time", 12)]),
    ("CHOT", &[tz("CHOT", "Choibalsan Standard Time", 8)]),
    ("CHOST", &[tz("CHOST", "Choibalsan Summer Time", 9)]),
    ("CHST", &[tz("CHST", "Chamorro Standard Time", 10)]),
    ("CHUT", &[tz("CHUT", "Chuuk Time", 10)]),
    ("CIST", &[tz("CIST", "Clipperton Island Standard Time", -8)]),
    ("CKT", &[tz("CKT", "Cook Island Time", -10)]),
    ("CLST", &[tz("CLST", "Chile Summer Time", -3)]),
    ("CLT", &[tz("CLT", "Chile Standard Time", -4)]),
    ("COST", &[tz("COST", "Colombia Summer Time", -4)]),
    ("COT", &[tz("COT", "Colombia Time", -5)]),
    ("CST", &[tz("CST", "Central Standard Time (North America)", -6), tz("CST", "China Standard Time", 8), tz("CST", "Cuba Standard Time", -5)]),
    ("CT", &[tz("CT", "Central Time", -6)]),
    ("CVT", &[tz("CVT", "Cape Verde Time", -1)]),
    ("CWST", &[tz("CWST", "Central Western Standard Time (Australia) unofficial", 8)]),
    ("CXT", &[tz("CXT", "Christmas Island Time", 7)]),
    ("DAVT", &[tz("DAVT", "Davis Time", 7)]),
    ("DDUT", &[tz("DDUT", "Dumont d'Urville Time", 10)]),
    ("DFT", &[tz("DFT", "AIX-specific equivalent of Central European Time", 1)]),
    ("EASST", &[tz("EASST", "Easter Island Summer Time", -5)]),
    ("EAST", &[tz("EAST", "Easter Island Standard Time", -6)]),
    ("EAT", &[tz("EAT", "East Africa Time", 3)]),
    ("ECT", &[tz("ECT", "Eastern Caribbean Time", -4), tz("ECT", "Ecuador Time", -5)]),
    ("EDT", &[tz("EDT", "Eastern Daylight Time (North America)", -4)]),
    ("EEST", &[tz("EEST", "Eastern European Summer Time", 3)]),
    ("EET", &[tz("EET", "Eastern European Time", 2)]),
    ("EGST", &[tz("EGST", "Eastern Greenland Summer Time", 0)]),
    ("EGT", &[tz("EGT", "Eastern Greenland Time", -1)]),
    ("EST", &[tz("EST", "Eastern Standard Time (North America)", -5)]),
    ("FET", &[tz("FET", "Further-eastern European Time", 3)]),
    ("FJT", &[tz("FJT", "Fiji Time", 12)]),
    ("FKST", &[tz("FKST", "Falkland Islands Summer Time", -3)]),
    ("FKT", &[tz("FKT", "Falkland Islands Time", -4)]),
    ("FNT", &[tz("FNT", "Fernando de Noronha Time", -2)]),
    ("GALT", &[tz("GALT", "Galápagos Time", -6)]),
    ("GAMT", &[tz("GAMT", "Gambier Islands Time", -9)]),
    ("GET", &[tz("GET", "Georgia Standard Time", 4)]),
    ("GFT", &[tz("GFT", "French Guiana Time", -3)]),
    ("GILT", &[tz("GILT", "Gilbert Island Time", 12)]),
    ("GIT", &[tz("GIT", "Gambier Island Time", -9)]),
    ("GMT", &[tz("GMT", "Greenwich Mean Time", 0)]),
    ("GST", &[tz("GST", "South Georgia and the South Sandwich Islands Time", -2), tz("GST", "Gulf Standard Time", 4)]),
    ("GYT", &[tz("GYT", "Guyana Time", -4)]),
    ("HDT", &[tz("HDT", "Hawaii–Aleutian Daylight Time", -9)]),
    ("HAEC", &[tz("HAEC", "Heure Avancée d'Europe Centrale", 2)]),
    ("HST", &[tz("HST", "Hawaii–Aleutian Standard Time", -10)]),
    ("HKT", &[tz("HKT", "Hong Kong Time", 8)]),
    ("HMT", &[tz("HMT", "Heard and McDonald Islands Time", 5)]),
    ("HOVST", &[tz("HOVST", "Hovd Summer Time", 8)]),
    ("HOVT", &[tz("HOVT", "Hovd Time", 7)]),
    ("ICT", &[tz("ICT", "Indochina Time", 7)]),
    ("IDLW", &[tz("IDLW", "International Day Line West", -12)]),
    ("IDT", &[tz("IDT", "Israel Daylight Time", 3)]),
    ("IOT", &[tz("IOT", "Indian Ocean Time", 3)]),
    ("IRDT", &[tz("IRDT", "Iran Daylight Time", 4)]),
    ("IRKT", &[tz("IRKT", "Irkutsk Time", 8)]),
    ("IRST", &[tz("IRST", "Iran Standard Time", 3)]),
    ("IST", &[tz("IST", "Indian Standard Time", 5), tz("IST", "Irish Standard Time", 1), tz("IST", "Israel Standard Time", 2)]),
    ("JST", &[tz("JST", "Japan Standard Time", 9)]),
    ("KALT", &[tz("KALT", "Kaliningrad Time", 2)]),
    ("KGT", &[tz("KGT", "Kyrgyzstan Time", 6)]),
    ("KOST", &[tz("KOST", "Kosrae Time", 11)]),
    ("KRAT", &[tz("KRAT", "Krasnoyarsk Time", 7)]),
    ("KST", &[tz("KST", "Korea Standard Time", 9)]),
    ("LHST", &[tz("LHST", "Lord Howe Standard Time", 10)]),
    ("LINT", &[tz("LINT", "Line Islands Time", 14)]),
    ("MAGT", &[tz("MAGT", "Magadan Time", 12)]),
    ("MART", &[tz("MART", "Marquesas Islands Time", -9)]),
    ("MAWT", &[tz("MAWT", "Mawson Station Time", 5)]),
    ("MDT", &[tz("MDT", "Mountain Daylight Time (North America)", -6)]),
    ("MET", &[tz("MET", "Middle European Time (same zone as CET)", 1)]),
    ("MEST", &[tz("MEST", "Middle European Summer Time (same zone as CEST)", 2)]),
    ("MHT", &[tz("MHT", "Marshall Islands Time", 12)]),
    ("MIST", &[tz("MIST", "Macquarie Island Station Time", 11)]),
    ("MIT", &[tz("MIT", "Marquesas Islands Time", -9)]),
    ("MMT", &[tz("MMT", "Myanmar Standard Time", 6)]),
    ("MSK", &[tz("MSK", "Moscow Time", 3)]),
    ("MST", &[tz("MST", "Malaysia Standard Time", 8), tz("MST", "Mountain Standard Time (North America)", -7)]),
    ("MUT", &[tz("MUT", "Mauritius Time", 4)]),
    ("MVT", &[tz("MVT", "Maldives Time", 5)]),
    ("MYT", &[tz("MYT", "Malaysia Time", 8)]),
    ("NCT", &[tz("NCT", "New Caledonia Time", 11)]),
    ("NDT", &[tz("NDT", "Newfoundland Daylight Time", -2)]),
    ("NFT", &[tz("NFT", "Norfolk Island Time", 11)]),
    ("NOVT", &[tz("NOVT", "Novosibirsk Time", 7)]),
    ("NPT", &[tz("NPT", "Nepal Time", 5)]),
    ("NST", &[tz("NST", "Newfoundland Standard Time", -3)]),
    ("NT", &[tz("NT", "Newfoundland Time", -3)]),
    ("NUT", &[tz("NUT", "Niue Time", -11)]),
    ("NZDT", &[tz("NZDT", "New Zealand Daylight Time", 13)]),
    ("NZST", &[tz("NZST", "New Zealand Standard Time", 12)]),
    ("OMST", &[tz("OMST", "Omsk Time", 6)]),
    ("ORAT", &[tz("ORAT", "Oral Time", 5)]),
    ("PDT", &[tz("PDT", "Pacific Daylight Time (North America)", -7)]),
    ("PET", &[tz("PET", "Peru Time", -5)]),
    ("PETT", &[tz("PETT", "Kamchatka Time", 12)]),
    ("PGT", &[tz("PGT", "Papua New Guinea Time", 10)]),
    ("PHOT", &[tz("PHOT", "Phoenix Island Time", 13)]),
    ("PHT", &[tz("PHT", "Philippine Time", 8)]),
    ("PKT", &[tz("PKT", "Pakistan Standard Time", 5)]),
    ("PMDT", &[tz("PMDT", "Saint Pierre and Miquelon Daylight Time", -2)]),
    ("PMST", &[tz("PMST", "Saint Pierre and Miquelon Standard Time", -3)]),
    ("PONT", &[tz("PONT", "Pohnpei Standard Time", 11)]),
    ("PST", &[tz("PST", "Pacific Standard Time (North America)", -8), tz("PST", "Philippine Standard Time", 8)]),
    ("PWT", &[tz("PWT", "Palau Time", 9)]),
    ("PYST", &[tz("PYST", "Paraguay Summer Time", -3)]),
    ("PYT", &[tz("PYT", "Paraguay Time", -4)]),
    ("RET", &[tz("RET", "Réunion Time", 4)]),
    ("ROTT", &[tz("ROTT", "Rothera Research Station Time", -3)]),
    ("SAKT", &[tz("SAKT", "Sakhalin Island Time", 11)]),
    ("SAMT", &[tz("SAMT", "Samara Time", 4)]),
    ("SAST", &[tz("SAST", "South African Standard Time", 2)]),
    ("SBT", &[tz("SBT", "Solomon Islands Time", 11)]),
    ("SCT", &[tz("SCT", "Seychelles Time", 4)]),
    ("SDT", &[tz("SDT", "Samoa Daylight Time", -10)]),
    ("SGT", &[tz("SGT", "Singapore Time", 8)]),
    ("SLST", &[tz("SLST", "Sri Lanka Standard Time", 5)]),
    ("SRET", &[tz("SRET", "Srednekolymsk Time", 11)]),
    ("SRT", &[tz("SRT", "Suriname Time", -3)]),
    ("SST", &[tz("SST", "Samoa Standard Time", -11), tz("SST", "Singapore Standard Time", 8)]),
    ("SYOT", &[tz("SYOT", "Showa Station Time", 3)]),
    ("TAHT", &[tz("TAHT", "Tahiti Time", -10)]),
    ("THA", &[tz("THA", "Thailand Standard Time", 7)]),
    ("TFT", &[tz("TFT", "French Southern and Antarctic Time", 5)]),
    ("TJT", &[tz("TJT", "Tajikistan Time", 5)]),
    ("TKT", &[tz("TKT", "Tokelau Time", 13)]),
    ("TLT", &[tz("TLT", "Timor Leste Time", 9)]),
    ("TMT", &[tz("TMT", "Turkmenistan Time", 5)]),
    ("TRT", &[tz("TRT", "Turkey Time", 3)]),
    ("TOT", &[tz("TOT", "Tonga Time", 13)]),
    ("TVT", &[tz("TVT", "Tuvalu Time", 12)]),
    ("ULAST", &[tz("ULAST", "Ulaanbaatar Summer Time", 9)]),
    ("ULAT", &[tz("ULAT", "Ulaanbaatar Standard Time", 8)]),
    ("UTC", &[tz("UTC", "Coordinated Universal Time", 0)]),
    ("UYST", &[tz("UYST", "Uruguay Summer Time", -2)]),
    ("UYT", &[tz("UYT", "Uruguay Standard Time", -3)]),
    ("UZT", &[tz("UZT", "Uzbekistan Time", 5)]),
    ("VET", &[tz("VET", "Venezuelan Standard Time", -4)]),
    ("VLAT", &[tz("VLAT", "Vladivostok Time", 10)]),
    ("VOLT", &[tz("VOLT", "Volgograd Time", 4)]),
    ("VOST", &[tz("VOST", "Vostok Station Time", 6)]),
    ("VUT", &[tz("VUT", "Vanuatu Time", 11)]),
    ("WAKT", &[tz("WAKT", "Wake Island Time", 12)]),
    ("WAST", &[tz("WAST", "West Africa Summer Time", 2)]),
    ("WAT", &[tz("WAT", "West Africa Time", 1)]),
    ("WEST", &[tz("WEST", "Western European Summer Time", 1)]),
    ("WET", &[tz("WET", "Western European Time", 0)]),
    ("WIB", &[tz("WIB", "Western Indonesian Time", 7)]),
    ("WIT", &[tz("WIT", "Eastern Indonesian Time", 9)]),
    ("WITA", &[tz("WITA", "Central Indonesia Time", 8)]),
    ("WGST", &[tz("WGST", "West Greenland Summer Time", -2)]),
    ("WGT", &[tz("WGT", "West Greenland Time", -3)]),
    ("WST", &[tz("WST", "Western Standard Time", 8)]),
    ("YAKT", &[tz("YAKT", "Yakutsk Time", 9)]),
    ("YEKT", &[tz("YEKT", "Yekaterinburg Time", 5)]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_abbrev_off_by_one_hour() {
        let got = lookup_full_tz("CDT", -6).unwrap();
        assert_eq!(got.full, "Central Daylight Time (North America)");
        assert_eq!(got.utc_offset, -5);
    }

    #[test]
    fn double_abbrev_exact_match() {
        let got = lookup_full_tz("CDT", -5).unwrap();
        assert_eq!(got.full, "Central Daylight Time (North America)");
    }

    #[test]
    fn double_abbrev_cuba() {
        let got = lookup_full_tz("CDT", -4).unwrap();
        assert_eq!(got.full, "Cuba Daylight Time");
        assert_eq!(got.utc_offset, -4);
    }

    #[test]
    fn pst_filipino() {
        let got = lookup_full_tz("PST", 8).unwrap();
        assert_eq!(got.full, "Philippine Standard Time");
    }

    #[test]
    fn pst_pacific() {
        let got = lookup_full_tz("PST", -8).unwrap();
        assert_eq!(got.full, "Pacific Standard Time (North America)");
    }

    #[test]
    fn triple_abbrev_cst() {
        assert_eq!(lookup_full_tz("CST", 8).unwrap().full, "China Standard Time");
        assert_eq!(
            lookup_full_tz("CST", -6).unwrap().full,
            "Central Standard Time (North America)"
        );
        assert_eq!(lookup_full_tz("CST", -5).unwrap().full, "Cuba Standard Time");
    }

    #[test]
    fn invalid_abbrevs_error() {
        assert!(lookup_full_tz("LMSKTK", -5).is_err());
        assert!(lookup_full_tz("", -5).is_err());
    }
}
