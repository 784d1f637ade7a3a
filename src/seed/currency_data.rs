//! ISO 4217 currencies with their issuing country

pub struct CurrencySeed {
    pub name: &'static str,
    pub country: &'static str,
    pub currency_code: &'static str,
    pub symbol: &'static str,
    pub emoji: &'static str,
    pub iso_3166_alpha2: &'static str,
    pub iso_3166_alpha3: &'static str,
    pub iso_3166_numeric: &'static str,
    pub phone_code: &'static str,
    pub domain: &'static str,
    pub locale: &'static str,
}

pub const CURRENCIES: &[CurrencySeed] = &[
    CurrencySeed {
        name: "US Dollar",
        country: "United States",
        currency_code: "USD",
        symbol: "US$",
        emoji: "🇺🇸",
        iso_3166_alpha2: "US",
        iso_3166_alpha3: "USA",
        iso_3166_numeric: "840",
        phone_code: "+1",
        domain: ".us",
        locale: "en_US",
    },
    CurrencySeed {
        name: "Euro",
        country: "European Union",
        currency_code: "EUR",
        symbol: "€",
        emoji: "🇪🇺",
        iso_3166_alpha2: "EU",
        iso_3166_alpha3: "EUR",
        iso_3166_numeric: "978",
        phone_code: "",
        domain: ".eu",
        locale: "en_EU",
    },
    CurrencySeed {
        name: "Japanese Yen",
        country: "Japan",
        currency_code: "JPY",
        symbol: "¥",
        emoji: "🇯🇵",
        iso_3166_alpha2: "JP",
        iso_3166_alpha3: "JPN",
        iso_3166_numeric: "392",
        phone_code: "+81",
        domain: ".jp",
        locale: "ja_JP",
    },
    CurrencySeed {
        name: "British Pound Sterling",
        country: "United Kingdom",
        currency_code: "GBP",
        symbol: "£",
        emoji: "🇬🇧",
        iso_3166_alpha2: "GB",
        iso_3166_alpha3: "GBR",
        iso_3166_numeric: "826",
        phone_code: "+44",
        domain: ".uk",
        locale: "en_GB",
    },
    CurrencySeed {
        name: "Australian Dollar",
        country: "Australia",
        currency_code: "AUD",
        symbol: "AU$",
        emoji: "🇦🇺",
        iso_3166_alpha2: "AU",
        iso_3166_alpha3: "AUS",
        iso_3166_numeric: "036",
        phone_code: "+61",
        domain: ".au",
        locale: "en_AU",
    },
    CurrencySeed {
        name: "Canadian Dollar",
        country: "Canada",
        currency_code: "CAD",
        symbol: "CA$",
        emoji: "🇨🇦",
        iso_3166_alpha2: "CA",
        iso_3166_alpha3: "CAN",
        iso_3166_numeric: "124",
        phone_code: "+1",
        domain: ".ca",
        locale: "en_CA",
    },
    CurrencySeed {
        name: "Swiss Franc",
        country: "Switzerland",
        currency_code: "CHF",
        symbol: "Fr",
        emoji: "🇨🇭",
        iso_3166_alpha2: "CH",
        iso_3166_alpha3: "CHE",
        iso_3166_numeric: "756",
        phone_code: "+41",
        domain: ".ch",
        locale: "de_CH",
    },
    CurrencySeed {
        name: "Chinese Yuan",
        country: "China",
        currency_code: "CNY",
        symbol: "CN¥",
        emoji: "🇨🇳",
        iso_3166_alpha2: "CN",
        iso_3166_alpha3: "CHN",
        iso_3166_numeric: "156",
        phone_code: "+86",
        domain: ".cn",
        locale: "zh_CN",
    },
    CurrencySeed {
        name: "Swedish Krona",
        country: "Sweden",
        currency_code: "SEK",
        symbol: "kr",
        emoji: "🇸🇪",
        iso_3166_alpha2: "SE",
        iso_3166_alpha3: "SWE",
        iso_3166_numeric: "752",
        phone_code: "+46",
        domain: ".se",
        locale: "sv_SE",
    },
    CurrencySeed {
        name: "New Zealand Dollar",
        country: "New Zealand",
        currency_code: "NZD",
        symbol: "NZ$",
        emoji: "🇳🇿",
        iso_3166_alpha2: "NZ",
        iso_3166_alpha3: "NZL",
        iso_3166_numeric: "554",
        phone_code: "+64",
        domain: ".nz",
        locale: "en_NZ",
    },
    CurrencySeed {
        name: "Philippine Peso",
        country: "Philippines",
        currency_code: "PHP",
        symbol: "₱",
        emoji: "🇵🇭",
        iso_3166_alpha2: "PH",
        iso_3166_alpha3: "PHL",
        iso_3166_numeric: "608",
        phone_code: "+63",
        domain: ".ph",
        locale: "en_PH",
    },
    CurrencySeed {
        name: "Indian Rupee",
        country: "India",
        currency_code: "INR",
        symbol: "₹",
        emoji: "🇮🇳",
        iso_3166_alpha2: "IN",
        iso_3166_alpha3: "IND",
        iso_3166_numeric: "356",
        phone_code: "+91",
        domain: ".in",
        locale: "hi_IN",
    },
    CurrencySeed {
        name: "South Korean Won",
        country: "South Korea",
        currency_code: "KRW",
        symbol: "₩",
        emoji: "🇰🇷",
        iso_3166_alpha2: "KR",
        iso_3166_alpha3: "KOR",
        iso_3166_numeric: "410",
        phone_code: "+82",
        domain: ".kr",
        locale: "ko_KR",
    },
    CurrencySeed {
        name: "Thai Baht",
        country: "Thailand",
        currency_code: "THB",
        symbol: "฿",
        emoji: "🇹🇭",
        iso_3166_alpha2: "TH",
        iso_3166_alpha3: "THA",
        iso_3166_numeric: "764",
        phone_code: "+66",
        domain: ".th",
        locale: "th_TH",
    },
    CurrencySeed {
        name: "Singapore Dollar",
        country: "Singapore",
        currency_code: "SGD",
        symbol: "S$",
        emoji: "🇸🇬",
        iso_3166_alpha2: "SG",
        iso_3166_alpha3: "SGP",
        iso_3166_numeric: "702",
        phone_code: "+65",
        domain: ".sg",
        locale: "en_SG",
    },
    CurrencySeed {
        name: "Hong Kong Dollar",
        country: "Hong Kong",
        currency_code: "HKD",
        symbol: "HK$",
        emoji: "🇭🇰",
        iso_3166_alpha2: "HK",
        iso_3166_alpha3: "HKG",
        iso_3166_numeric: "344",
        phone_code: "+852",
        domain: ".hk",
        locale: "zh_HK",
    },
    CurrencySeed {
        name: "Malaysian Ringgit",
        country: "Malaysia",
        currency_code: "MYR",
        symbol: "RM",
        emoji: "🇲🇾",
        iso_3166_alpha2: "MY",
        iso_3166_alpha3: "MYS",
        iso_3166_numeric: "458",
        phone_code: "+60",
        domain: ".my",
        locale: "ms_MY",
    },
    CurrencySeed {
        name: "Indonesian Rupiah",
        country: "Indonesia",
        currency_code: "IDR",
        symbol: "Rp",
        emoji: "🇮🇩",
        iso_3166_alpha2: "ID",
        iso_3166_alpha3: "IDN",
        iso_3166_numeric: "360",
        phone_code: "+62",
        domain: ".id",
        locale: "id_ID",
    },
    CurrencySeed {
        name: "Vietnamese Dong",
        country: "Vietnam",
        currency_code: "VND",
        symbol: "₫",
        emoji: "🇻🇳",
        iso_3166_alpha2: "VN",
        iso_3166_alpha3: "VNM",
        iso_3166_numeric: "704",
        phone_code: "+84",
        domain: ".vn",
        locale: "vi_VN",
    },
    CurrencySeed {
        name: "Taiwan Dollar",
        country: "Taiwan",
        currency_code: "TWD",
        symbol: "NT$",
        emoji: "🇹🇼",
        iso_3166_alpha2: "TW",
        iso_3166_alpha3: "TWN",
        iso_3166_numeric: "158",
        phone_code: "+886",
        domain: ".tw",
        locale: "zh_TW",
    },
    CurrencySeed {
        name: "Brunei Dollar",
        country: "Brunei",
        currency_code: "BND",
        symbol: "B$",
        emoji: "🇧🇳",
        iso_3166_alpha2: "BN",
        iso_3166_alpha3: "BRN",
        iso_3166_numeric: "096",
        phone_code: "+673",
        domain: ".bn",
        locale: "ms_BN",
    },
    CurrencySeed {
        name: "Saudi Riyal",
        country: "Saudi Arabia",
        currency_code: "SAR",
        symbol: "ر.س",
        emoji: "🇸🇦",
        iso_3166_alpha2: "SA",
        iso_3166_alpha3: "SAU",
        iso_3166_numeric: "682",
        phone_code: "+966",
        domain: ".sa",
        locale: "ar_SA",
    },
    CurrencySeed {
        name: "UAE Dirham",
        country: "United Arab Emirates",
        currency_code: "AED",
        symbol: "د.إ",
        emoji: "🇦🇪",
        iso_3166_alpha2: "AE",
        iso_3166_alpha3: "ARE",
        iso_3166_numeric: "784",
        phone_code: "+971",
        domain: ".ae",
        locale: "ar_AE",
    },
    CurrencySeed {
        name: "Israeli New Shekel",
        country: "Israel",
        currency_code: "ILS",
        symbol: "₪",
        emoji: "🇮🇱",
        iso_3166_alpha2: "IL",
        iso_3166_alpha3: "ISR",
        iso_3166_numeric: "376",
        phone_code: "+972",
        domain: ".il",
        locale: "he_IL",
    },
    CurrencySeed {
        name: "South African Rand",
        country: "South Africa",
        currency_code: "ZAR",
        symbol: "R",
        emoji: "🇿🇦",
        iso_3166_alpha2: "ZA",
        iso_3166_alpha3: "ZAF",
        iso_3166_numeric: "710",
        phone_code: "+27",
        domain: ".za",
        locale: "af_ZA",
    },
    CurrencySeed {
        name: "Egyptian Pound",
        country: "Egypt",
        currency_code: "EGP",
        symbol: "ج.م",
        emoji: "🇪🇬",
        iso_3166_alpha2: "EG",
        iso_3166_alpha3: "EGY",
        iso_3166_numeric: "818",
        phone_code: "+20",
        domain: ".eg",
        locale: "ar_EG",
    },
    CurrencySeed {
        name: "Turkish Lira",
        country: "Turkey",
        currency_code: "TRY",
        symbol: "₺",
        emoji: "🇹🇷",
        iso_3166_alpha2: "TR",
        iso_3166_alpha3: "TUR",
        iso_3166_numeric: "792",
        phone_code: "+90",
        domain: ".tr",
        locale: "tr_TR",
    },
    CurrencySeed {
        name: "West African CFA Franc",
        country: "West African States",
        currency_code: "XOF",
        symbol: "CFA",
        emoji: "🌍",
        iso_3166_alpha2: "",
        iso_3166_alpha3: "",
        iso_3166_numeric: "952",
        phone_code: "",
        domain: "",
        locale: "fr_FR",
    },
    CurrencySeed {
        name: "Central African CFA Franc",
        country: "Central African States",
        currency_code: "XAF",
        symbol: "CFA",
        emoji: "🌍",
        iso_3166_alpha2: "",
        iso_3166_alpha3: "",
        iso_3166_numeric: "950",
        phone_code: "",
        domain: "",
        locale: "fr_FR",
    },
    CurrencySeed {
        name: "Mauritian Rupee",
        country: "Mauritius",
        currency_code: "MUR",
        symbol: "₨",
        emoji: "🇲🇺",
        iso_3166_alpha2: "MU",
        iso_3166_alpha3: "MUS",
        iso_3166_numeric: "480",
        phone_code: "+230",
        domain: ".mu",
        locale: "en_MU",
    },
    CurrencySeed {
        name: "Maldivian Rufiyaa",
        country: "Maldives",
        currency_code: "MVR",
        symbol: "Rf",
        emoji: "🇲🇻",
        iso_3166_alpha2: "MV",
        iso_3166_alpha3: "MDV",
        iso_3166_numeric: "462",
        phone_code: "+960",
        domain: ".mv",
        locale: "dv_MV",
    },
    CurrencySeed {
        name: "Norwegian Krone",
        country: "Norway",
        currency_code: "NOK",
        symbol: "kr",
        emoji: "🇳🇴",
        iso_3166_alpha2: "NO",
        iso_3166_alpha3: "NOR",
        iso_3166_numeric: "578",
        phone_code: "+47",
        domain: ".no",
        locale: "nb_NO",
    },
    CurrencySeed {
        name: "Danish Krone",
        country: "Denmark",
        currency_code: "DKK",
        symbol: "kr",
        emoji: "🇩🇰",
        iso_3166_alpha2: "DK",
        iso_3166_alpha3: "DNK",
        iso_3166_numeric: "208",
        phone_code: "+45",
        domain: ".dk",
        locale: "da_DK",
    },
    CurrencySeed {
        name: "Polish Zloty",
        country: "Poland",
        currency_code: "PLN",
        symbol: "zł",
        emoji: "🇵🇱",
        iso_3166_alpha2: "PL",
        iso_3166_alpha3: "POL",
        iso_3166_numeric: "616",
        phone_code: "+48",
        domain: ".pl",
        locale: "pl_PL",
    },
    CurrencySeed {
        name: "Czech Koruna",
        country: "Czech Republic",
        currency_code: "CZK",
        symbol: "Kč",
        emoji: "🇨🇿",
        iso_3166_alpha2: "CZ",
        iso_3166_alpha3: "CZE",
        iso_3166_numeric: "203",
        phone_code: "+420",
        domain: ".cz",
        locale: "cs_CZ",
    },
    CurrencySeed {
        name: "Hungarian Forint",
        country: "Hungary",
        currency_code: "HUF",
        symbol: "Ft",
        emoji: "🇭🇺",
        iso_3166_alpha2: "HU",
        iso_3166_alpha3: "HUN",
        iso_3166_numeric: "348",
        phone_code: "+36",
        domain: ".hu",
        locale: "hu_HU",
    },
    CurrencySeed {
        name: "Russian Ruble",
        country: "Russia",
        currency_code: "RUB",
        symbol: "₽",
        emoji: "🇷🇺",
        iso_3166_alpha2: "RU",
        iso_3166_alpha3: "RUS",
        iso_3166_numeric: "643",
        phone_code: "+7",
        domain: ".ru",
        locale: "ru_RU",
    },
    CurrencySeed {
        name: "Euro (Croatia)",
        country: "Croatia",
        currency_code: "EUR",
        symbol: "€",
        emoji: "🇭🇷",
        iso_3166_alpha2: "HR",
        iso_3166_alpha3: "HRV",
        iso_3166_numeric: "191",
        phone_code: "+385",
        domain: ".hr",
        locale: "hr_HR",
    },
    CurrencySeed {
        name: "Brazilian Real",
        country: "Brazil",
        currency_code: "BRL",
        symbol: "R$",
        emoji: "🇧🇷",
        iso_3166_alpha2: "BR",
        iso_3166_alpha3: "BRA",
        iso_3166_numeric: "076",
        phone_code: "+55",
        domain: ".br",
        locale: "pt_BR",
    },
    CurrencySeed {
        name: "Mexican Peso",
        country: "Mexico",
        currency_code: "MXN",
        symbol: "MX$",
        emoji: "🇲🇽",
        iso_3166_alpha2: "MX",
        iso_3166_alpha3: "MEX",
        iso_3166_numeric: "484",
        phone_code: "+52",
        domain: ".mx",
        locale: "es_MX",
    },
    CurrencySeed {
        name: "Argentine Peso",
        country: "Argentina",
        currency_code: "ARS",
        symbol: "AR$",
        emoji: "🇦🇷",
        iso_3166_alpha2: "AR",
        iso_3166_alpha3: "ARG",
        iso_3166_numeric: "032",
        phone_code: "+54",
        domain: ".ar",
        locale: "es_AR",
    },
    CurrencySeed {
        name: "Chilean Peso",
        country: "Chile",
        currency_code: "CLP",
        symbol: "CL$",
        emoji: "🇨🇱",
        iso_3166_alpha2: "CL",
        iso_3166_alpha3: "CHL",
        iso_3166_numeric: "152",
        phone_code: "+56",
        domain: ".cl",
        locale: "es_CL",
    },
    CurrencySeed {
        name: "Colombian Peso",
        country: "Colombia",
        currency_code: "COP",
        symbol: "CO$",
        emoji: "🇨🇴",
        iso_3166_alpha2: "CO",
        iso_3166_alpha3: "COL",
        iso_3166_numeric: "170",
        phone_code: "+57",
        domain: ".co",
        locale: "es_CO",
    },
    CurrencySeed {
        name: "Peruvian Sol",
        country: "Peru",
        currency_code: "PEN",
        symbol: "S/",
        emoji: "🇵🇪",
        iso_3166_alpha2: "PE",
        iso_3166_alpha3: "PER",
        iso_3166_numeric: "604",
        phone_code: "+51",
        domain: ".pe",
        locale: "es_PE",
    },
    CurrencySeed {
        name: "Uruguayan Peso",
        country: "Uruguay",
        currency_code: "UYU",
        symbol: "$U",
        emoji: "🇺🇾",
        iso_3166_alpha2: "UY",
        iso_3166_alpha3: "URY",
        iso_3166_numeric: "858",
        phone_code: "+598",
        domain: ".uy",
        locale: "es_UY",
    },
    CurrencySeed {
        name: "Dominican Peso",
        country: "Dominican Republic",
        currency_code: "DOP",
        symbol: "RD$",
        emoji: "🇩🇴",
        iso_3166_alpha2: "DO",
        iso_3166_alpha3: "DOM",
        iso_3166_numeric: "214",
        phone_code: "+1",
        domain: ".do",
        locale: "es_DO",
    },
    CurrencySeed {
        name: "Paraguayan Guarani",
        country: "Paraguay",
        currency_code: "PYG",
        symbol: "₲",
        emoji: "🇵🇾",
        iso_3166_alpha2: "PY",
        iso_3166_alpha3: "PRY",
        iso_3166_numeric: "600",
        phone_code: "+595",
        domain: ".py",
        locale: "es_PY",
    },
    CurrencySeed {
        name: "Bolivian Boliviano",
        country: "Bolivia",
        currency_code: "BOB",
        symbol: "Bs",
        emoji: "🇧🇴",
        iso_3166_alpha2: "BO",
        iso_3166_alpha3: "BOL",
        iso_3166_numeric: "068",
        phone_code: "+591",
        domain: ".bo",
        locale: "es_BO",
    },
    CurrencySeed {
        name: "Venezuelan Bolívar",
        country: "Venezuela",
        currency_code: "VES",
        symbol: "Bs.S",
        emoji: "🇻🇪",
        iso_3166_alpha2: "VE",
        iso_3166_alpha3: "VEN",
        iso_3166_numeric: "928",
        phone_code: "+58",
        domain: ".ve",
        locale: "es_VE",
    },
    CurrencySeed {
        name: "Pakistani Rupee",
        country: "Pakistan",
        currency_code: "PKR",
        symbol: "₨",
        emoji: "🇵🇰",
        iso_3166_alpha2: "PK",
        iso_3166_alpha3: "PAK",
        iso_3166_numeric: "586",
        phone_code: "+92",
        domain: ".pk",
        locale: "ur_PK",
    },
    CurrencySeed {
        name: "Bangladeshi Taka",
        country: "Bangladesh",
        currency_code: "BDT",
        symbol: "৳",
        emoji: "🇧🇩",
        iso_3166_alpha2: "BD",
        iso_3166_alpha3: "BGD",
        iso_3166_numeric: "050",
        phone_code: "+880",
        domain: ".bd",
        locale: "bn_BD",
    },
    CurrencySeed {
        name: "Sri Lankan Rupee",
        country: "Sri Lanka",
        currency_code: "LKR",
        symbol: "Rs",
        emoji: "🇱🇰",
        iso_3166_alpha2: "LK",
        iso_3166_alpha3: "LKA",
        iso_3166_numeric: "144",
        phone_code: "+94",
        domain: ".lk",
        locale: "si_LK",
    },
    CurrencySeed {
        name: "Nepalese Rupee",
        country: "Nepal",
        currency_code: "NPR",
        symbol: "Rs",
        emoji: "🇳🇵",
        iso_3166_alpha2: "NP",
        iso_3166_alpha3: "NPL",
        iso_3166_numeric: "524",
        phone_code: "+977",
        domain: ".np",
        locale: "ne_NP",
    },
    CurrencySeed {
        name: "Myanmar Kyat",
        country: "Myanmar",
        currency_code: "MMK",
        symbol: "K",
        emoji: "🇲🇲",
        iso_3166_alpha2: "MM",
        iso_3166_alpha3: "MMR",
        iso_3166_numeric: "104",
        phone_code: "+95",
        domain: ".mm",
        locale: "my_MM",
    },
    CurrencySeed {
        name: "Cambodian Riel",
        country: "Cambodia",
        currency_code: "KHR",
        symbol: "៛",
        emoji: "🇰🇭",
        iso_3166_alpha2: "KH",
        iso_3166_alpha3: "KHM",
        iso_3166_numeric: "116",
        phone_code: "+855",
        domain: ".kh",
        locale: "km_KH",
    },
    CurrencySeed {
        name: "Laotian Kip",
        country: "Laos",
        currency_code: "LAK",
        symbol: "₭",
        emoji: "🇱🇦",
        iso_3166_alpha2: "LA",
        iso_3166_alpha3: "LAO",
        iso_3166_numeric: "418",
        phone_code: "+856",
        domain: ".la",
        locale: "lo_LA",
    },
    CurrencySeed {
        name: "Nigerian Naira",
        country: "Nigeria",
        currency_code: "NGN",
        symbol: "₦",
        emoji: "🇳🇬",
        iso_3166_alpha2: "NG",
        iso_3166_alpha3: "NGA",
        iso_3166_numeric: "566",
        phone_code: "+234",
        domain: ".ng",
        locale: "en_NG",
    },
    CurrencySeed {
        name: "Kenyan Shilling",
        country: "Kenya",
        currency_code: "KES",
        symbol: "KSh",
        emoji: "🇰🇪",
        iso_3166_alpha2: "KE",
        iso_3166_alpha3: "KEN",
        iso_3166_numeric: "404",
        phone_code: "+254",
        domain: ".ke",
        locale: "sw_KE",
    },
    CurrencySeed {
        name: "Ghanaian Cedi",
        country: "Ghana",
        currency_code: "GHS",
        symbol: "₵",
        emoji: "🇬🇭",
        iso_3166_alpha2: "GH",
        iso_3166_alpha3: "GHA",
        iso_3166_numeric: "288",
        phone_code: "+233",
        domain: ".gh",
        locale: "en_GH",
    },
    CurrencySeed {
        name: "Moroccan Dirham",
        country: "Morocco",
        currency_code: "MAD",
        symbol: "د.م.",
        emoji: "🇲🇦",
        iso_3166_alpha2: "MA",
        iso_3166_alpha3: "MAR",
        iso_3166_numeric: "504",
        phone_code: "+212",
        domain: ".ma",
        locale: "ar_MA",
    },
    CurrencySeed {
        name: "Tunisian Dinar",
        country: "Tunisia",
        currency_code: "TND",
        symbol: "د.ت",
        emoji: "🇹🇳",
        iso_3166_alpha2: "TN",
        iso_3166_alpha3: "TUN",
        iso_3166_numeric: "788",
        phone_code: "+216",
        domain: ".tn",
        locale: "ar_TN",
    },
    CurrencySeed {
        name: "Ethiopian Birr",
        country: "Ethiopia",
        currency_code: "ETB",
        symbol: "Br",
        emoji: "🇪🇹",
        iso_3166_alpha2: "ET",
        iso_3166_alpha3: "ETH",
        iso_3166_numeric: "230",
        phone_code: "+251",
        domain: ".et",
        locale: "am_ET",
    },
    CurrencySeed {
        name: "Algerian Dinar",
        country: "Algeria",
        currency_code: "DZD",
        symbol: "د.ج",
        emoji: "🇩🇿",
        iso_3166_alpha2: "DZ",
        iso_3166_alpha3: "DZA",
        iso_3166_numeric: "012",
        phone_code: "+213",
        domain: ".dz",
        locale: "ar_DZ",
    },
    CurrencySeed {
        name: "Ukrainian Hryvnia",
        country: "Ukraine",
        currency_code: "UAH",
        symbol: "₴",
        emoji: "🇺🇦",
        iso_3166_alpha2: "UA",
        iso_3166_alpha3: "UKR",
        iso_3166_numeric: "804",
        phone_code: "+380",
        domain: ".ua",
        locale: "uk_UA",
    },
    CurrencySeed {
        name: "Romanian Leu",
        country: "Romania",
        currency_code: "RON",
        symbol: "lei",
        emoji: "🇷🇴",
        iso_3166_alpha2: "RO",
        iso_3166_alpha3: "ROU",
        iso_3166_numeric: "642",
        phone_code: "+40",
        domain: ".ro",
        locale: "ro_RO",
    },
    CurrencySeed {
        name: "Bulgarian Lev",
        country: "Bulgaria",
        currency_code: "BGN",
        symbol: "лв",
        emoji: "🇧🇬",
        iso_3166_alpha2: "BG",
        iso_3166_alpha3: "BGR",
        iso_3166_numeric: "100",
        phone_code: "+359",
        domain: ".bg",
        locale: "bg_BG",
    },
    CurrencySeed {
        name: "Serbian Dinar",
        country: "Serbia",
        currency_code: "RSD",
        symbol: "дин",
        emoji: "🇷🇸",
        iso_3166_alpha2: "RS",
        iso_3166_alpha3: "SRB",
        iso_3166_numeric: "941",
        phone_code: "+381",
        domain: ".rs",
        locale: "sr_RS",
    },
    CurrencySeed {
        name: "Icelandic Krona",
        country: "Iceland",
        currency_code: "ISK",
        symbol: "kr",
        emoji: "🇮🇸",
        iso_3166_alpha2: "IS",
        iso_3166_alpha3: "ISL",
        iso_3166_numeric: "352",
        phone_code: "+354",
        domain: ".is",
        locale: "is_IS",
    },
    CurrencySeed {
        name: "Belarusian Ruble",
        country: "Belarus",
        currency_code: "BYN",
        symbol: "Br",
        emoji: "🇧🇾",
        iso_3166_alpha2: "BY",
        iso_3166_alpha3: "BLR",
        iso_3166_numeric: "933",
        phone_code: "+375",
        domain: ".by",
        locale: "be_BY",
    },
    CurrencySeed {
        name: "Fijian Dollar",
        country: "Fiji",
        currency_code: "FJD",
        symbol: "FJ$",
        emoji: "🇫🇯",
        iso_3166_alpha2: "FJ",
        iso_3166_alpha3: "FJI",
        iso_3166_numeric: "242",
        phone_code: "+679",
        domain: ".fj",
        locale: "en_FJ",
    },
    CurrencySeed {
        name: "Papua New Guinea Kina",
        country: "Papua New Guinea",
        currency_code: "PGK",
        symbol: "K",
        emoji: "🇵🇬",
        iso_3166_alpha2: "PG",
        iso_3166_alpha3: "PNG",
        iso_3166_numeric: "598",
        phone_code: "+675",
        domain: ".pg",
        locale: "en_PG",
    },
    CurrencySeed {
        name: "Jamaican Dollar",
        country: "Jamaica",
        currency_code: "JMD",
        symbol: "J$",
        emoji: "🇯🇲",
        iso_3166_alpha2: "JM",
        iso_3166_alpha3: "JAM",
        iso_3166_numeric: "388",
        phone_code: "+1",
        domain: ".jm",
        locale: "en_JM",
    },
    CurrencySeed {
        name: "Costa Rican Colon",
        country: "Costa Rica",
        currency_code: "CRC",
        symbol: "₡",
        emoji: "🇨🇷",
        iso_3166_alpha2: "CR",
        iso_3166_alpha3: "CRI",
        iso_3166_numeric: "188",
        phone_code: "+506",
        domain: ".cr",
        locale: "es_CR",
    },
    CurrencySeed {
        name: "Guatemalan Quetzal",
        country: "Guatemala",
        currency_code: "GTQ",
        symbol: "Q",
        emoji: "🇬🇹",
        iso_3166_alpha2: "GT",
        iso_3166_alpha3: "GTM",
        iso_3166_numeric: "320",
        phone_code: "+502",
        domain: ".gt",
        locale: "es_GT",
    },
    CurrencySeed {
        name: "Special Drawing Rights",
        country: "IMF",
        currency_code: "XDR",
        symbol: "SDR",
        emoji: "🏦",
        iso_3166_alpha2: "",
        iso_3166_alpha3: "",
        iso_3166_numeric: "960",
        phone_code: "",
        domain: "",
        locale: "en_US",
    },
    CurrencySeed {
        name: "Kuwaiti Dinar",
        country: "Kuwait",
        currency_code: "KWD",
        symbol: "د.ك",
        emoji: "🇰🇼",
        iso_3166_alpha2: "KW",
        iso_3166_alpha3: "KWT",
        iso_3166_numeric: "414",
        phone_code: "+965",
        domain: ".kw",
        locale: "ar_KW",
    },
    CurrencySeed {
        name: "Qatari Riyal",
        country: "Qatar",
        currency_code: "QAR",
        symbol: "ر.ق",
        emoji: "🇶🇦",
        iso_3166_alpha2: "QA",
        iso_3166_alpha3: "QAT",
        iso_3166_numeric: "634",
        phone_code: "+974",
        domain: ".qa",
        locale: "ar_QA",
    },
    CurrencySeed {
        name: "Omani Rial",
        country: "Oman",
        currency_code: "OMR",
        symbol: "ر.ع",
        emoji: "🇴🇲",
        iso_3166_alpha2: "OM",
        iso_3166_alpha3: "OMN",
        iso_3166_numeric: "512",
        phone_code: "+968",
        domain: ".om",
        locale: "ar_OM",
    },
    CurrencySeed {
        name: "Bahraini Dinar",
        country: "Bahrain",
        currency_code: "BHD",
        symbol: "ب.د",
        emoji: "🇧🇭",
        iso_3166_alpha2: "BH",
        iso_3166_alpha3: "BHR",
        iso_3166_numeric: "048",
        phone_code: "+973",
        domain: ".bh",
        locale: "ar_BH",
    },
    CurrencySeed {
        name: "Jordanian Dinar",
        country: "Jordan",
        currency_code: "JOD",
        symbol: "د.ا",
        emoji: "🇯🇴",
        iso_3166_alpha2: "JO",
        iso_3166_alpha3: "JOR",
        iso_3166_numeric: "400",
        phone_code: "+962",
        domain: ".jo",
        locale: "ar_JO",
    },
    CurrencySeed {
        name: "Kazakhstani Tenge",
        country: "Kazakhstan",
        currency_code: "KZT",
        symbol: "₸",
        emoji: "🇰🇿",
        iso_3166_alpha2: "KZ",
        iso_3166_alpha3: "KAZ",
        iso_3166_numeric: "398",
        phone_code: "+7",
        domain: ".kz",
        locale: "kk_KZ",
    },
];
