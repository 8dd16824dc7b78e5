// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Static side tables consumed when regenerating the mapping snapshot.
//!
//! `TZ_LINKS` mirrors the tz database `backward` file (alias to canonical
//! name); the upstream document only lists one spelling per zone, so the
//! closure step uses these to reach every name the provider enumerates.
//! `WINDOWS_ZONE_NAMES` carries the Windows display strings, which the
//! upstream document does not include. `POSIX_SUPPLEMENT` covers the
//! POSIX-era zone names absent from both.

/// tzdb alias to canonical name, sorted by alias.
pub(crate) static TZ_LINKS: &[(&str, &str)] = &[
    ("Africa/Asmera", "Africa/Nairobi"),
    ("Africa/Timbuktu", "Africa/Abidjan"),
    ("America/Argentina/ComodRivadavia", "America/Argentina/Catamarca"),
    ("America/Atka", "America/Adak"),
    ("America/Buenos_Aires", "America/Argentina/Buenos_Aires"),
    ("America/Catamarca", "America/Argentina/Catamarca"),
    ("America/Coral_Harbour", "America/Panama"),
    ("America/Cordoba", "America/Argentina/Cordoba"),
    ("America/Ensenada", "America/Tijuana"),
    ("America/Fort_Wayne", "America/Indiana/Indianapolis"),
    ("America/Godthab", "America/Nuuk"),
    ("America/Indianapolis", "America/Indiana/Indianapolis"),
    ("America/Jujuy", "America/Argentina/Jujuy"),
    ("America/Knox_IN", "America/Indiana/Knox"),
    ("America/Kralendijk", "America/Puerto_Rico"),
    ("America/Louisville", "America/Kentucky/Louisville"),
    ("America/Lower_Princes", "America/Puerto_Rico"),
    ("America/Marigot", "America/Puerto_Rico"),
    ("America/Mendoza", "America/Argentina/Mendoza"),
    ("America/Montreal", "America/Toronto"),
    ("America/Nipigon", "America/Toronto"),
    ("America/Pangnirtung", "America/Iqaluit"),
    ("America/Porto_Acre", "America/Rio_Branco"),
    ("America/Rainy_River", "America/Winnipeg"),
    ("America/Rosario", "America/Argentina/Cordoba"),
    ("America/Santa_Isabel", "America/Tijuana"),
    ("America/Shiprock", "America/Denver"),
    ("America/St_Barthelemy", "America/Puerto_Rico"),
    ("America/Thunder_Bay", "America/Toronto"),
    ("America/Virgin", "America/Puerto_Rico"),
    ("America/Yellowknife", "America/Edmonton"),
    ("Antarctica/South_Pole", "Pacific/Auckland"),
    ("Arctic/Longyearbyen", "Europe/Berlin"),
    ("Asia/Ashkhabad", "Asia/Ashgabat"),
    ("Asia/Calcutta", "Asia/Kolkata"),
    ("Asia/Choibalsan", "Asia/Ulaanbaatar"),
    ("Asia/Chongqing", "Asia/Shanghai"),
    ("Asia/Chungking", "Asia/Shanghai"),
    ("Asia/Dacca", "Asia/Dhaka"),
    ("Asia/Harbin", "Asia/Shanghai"),
    ("Asia/Istanbul", "Europe/Istanbul"),
    ("Asia/Kashgar", "Asia/Urumqi"),
    ("Asia/Katmandu", "Asia/Kathmandu"),
    ("Asia/Macao", "Asia/Macau"),
    ("Asia/Rangoon", "Asia/Yangon"),
    ("Asia/Saigon", "Asia/Ho_Chi_Minh"),
    ("Asia/Tel_Aviv", "Asia/Jerusalem"),
    ("Asia/Thimbu", "Asia/Thimphu"),
    ("Asia/Ujung_Pandang", "Asia/Makassar"),
    ("Asia/Ulan_Bator", "Asia/Ulaanbaatar"),
    ("Atlantic/Faeroe", "Atlantic/Faroe"),
    ("Atlantic/Jan_Mayen", "Europe/Berlin"),
    ("Australia/ACT", "Australia/Sydney"),
    ("Australia/Canberra", "Australia/Sydney"),
    ("Australia/Currie", "Australia/Hobart"),
    ("Australia/LHI", "Australia/Lord_Howe"),
    ("Australia/NSW", "Australia/Sydney"),
    ("Australia/North", "Australia/Darwin"),
    ("Australia/Queensland", "Australia/Brisbane"),
    ("Australia/South", "Australia/Adelaide"),
    ("Australia/Tasmania", "Australia/Hobart"),
    ("Australia/Victoria", "Australia/Melbourne"),
    ("Australia/West", "Australia/Perth"),
    ("Australia/Yancowinna", "Australia/Broken_Hill"),
    ("Brazil/Acre", "America/Rio_Branco"),
    ("Brazil/DeNoronha", "America/Noronha"),
    ("Brazil/East", "America/Sao_Paulo"),
    ("Brazil/West", "America/Manaus"),
    ("Canada/Atlantic", "America/Halifax"),
    ("Canada/Central", "America/Winnipeg"),
    ("Canada/Eastern", "America/Toronto"),
    ("Canada/Mountain", "America/Edmonton"),
    ("Canada/Newfoundland", "America/St_Johns"),
    ("Canada/Pacific", "America/Vancouver"),
    ("Canada/Saskatchewan", "America/Regina"),
    ("Canada/Yukon", "America/Whitehorse"),
    ("Chile/Continental", "America/Santiago"),
    ("Chile/EasterIsland", "Pacific/Easter"),
    ("Cuba", "America/Havana"),
    ("Egypt", "Africa/Cairo"),
    ("Eire", "Europe/Dublin"),
    ("Etc/GMT+0", "Etc/GMT"),
    ("Etc/GMT-0", "Etc/GMT"),
    ("Etc/GMT0", "Etc/GMT"),
    ("Etc/Greenwich", "Etc/GMT"),
    ("Etc/UCT", "Etc/UTC"),
    ("Etc/Universal", "Etc/UTC"),
    ("Etc/Zulu", "Etc/UTC"),
    ("Europe/Belfast", "Europe/London"),
    ("Europe/Bratislava", "Europe/Prague"),
    ("Europe/Busingen", "Europe/Zurich"),
    ("Europe/Kiev", "Europe/Kyiv"),
    ("Europe/Mariehamn", "Europe/Helsinki"),
    ("Europe/Nicosia", "Asia/Nicosia"),
    ("Europe/Podgorica", "Europe/Belgrade"),
    ("Europe/San_Marino", "Europe/Rome"),
    ("Europe/Tiraspol", "Europe/Chisinau"),
    ("Europe/Uzhgorod", "Europe/Kyiv"),
    ("Europe/Vatican", "Europe/Rome"),
    ("Europe/Zaporozhye", "Europe/Kyiv"),
    ("GB", "Europe/London"),
    ("GB-Eire", "Europe/London"),
    ("GMT", "Etc/GMT"),
    ("GMT+0", "Etc/GMT"),
    ("GMT-0", "Etc/GMT"),
    ("GMT0", "Etc/GMT"),
    ("Greenwich", "Etc/GMT"),
    ("Hongkong", "Asia/Hong_Kong"),
    ("Iceland", "Africa/Abidjan"),
    ("Iran", "Asia/Tehran"),
    ("Israel", "Asia/Jerusalem"),
    ("Jamaica", "America/Jamaica"),
    ("Japan", "Asia/Tokyo"),
    ("Kwajalein", "Pacific/Kwajalein"),
    ("Libya", "Africa/Tripoli"),
    ("Mexico/BajaNorte", "America/Tijuana"),
    ("Mexico/BajaSur", "America/Mazatlan"),
    ("Mexico/General", "America/Mexico_City"),
    ("NZ", "Pacific/Auckland"),
    ("NZ-CHAT", "Pacific/Chatham"),
    ("Navajo", "America/Denver"),
    ("PRC", "Asia/Shanghai"),
    ("Pacific/Enderbury", "Pacific/Kanton"),
    ("Pacific/Johnston", "Pacific/Honolulu"),
    ("Pacific/Ponape", "Pacific/Guadalcanal"),
    ("Pacific/Samoa", "Pacific/Pago_Pago"),
    ("Pacific/Truk", "Pacific/Port_Moresby"),
    ("Pacific/Yap", "Pacific/Port_Moresby"),
    ("Poland", "Europe/Warsaw"),
    ("Portugal", "Europe/Lisbon"),
    ("ROC", "Asia/Taipei"),
    ("ROK", "Asia/Seoul"),
    ("Singapore", "Asia/Singapore"),
    ("Turkey", "Europe/Istanbul"),
    ("UCT", "Etc/UTC"),
    ("US/Alaska", "America/Anchorage"),
    ("US/Aleutian", "America/Adak"),
    ("US/Arizona", "America/Phoenix"),
    ("US/Central", "America/Chicago"),
    ("US/East-Indiana", "America/Indiana/Indianapolis"),
    ("US/Eastern", "America/New_York"),
    ("US/Hawaii", "Pacific/Honolulu"),
    ("US/Indiana-Starke", "America/Indiana/Knox"),
    ("US/Michigan", "America/Detroit"),
    ("US/Mountain", "America/Denver"),
    ("US/Pacific", "America/Los_Angeles"),
    ("US/Samoa", "Pacific/Pago_Pago"),
    ("UTC", "Etc/UTC"),
    ("Universal", "Etc/UTC"),
    ("W-SU", "Europe/Moscow"),
    ("Zulu", "Etc/UTC"),
];

/// Windows zone id to display name, sorted by id.
pub(crate) static WINDOWS_ZONE_NAMES: &[(&str, &str)] = &[
    ("AUS Central Standard Time", "(UTC+09:30) Darwin"),
    ("AUS Eastern Standard Time", "(UTC+10:00) Canberra, Melbourne, Sydney"),
    ("Afghanistan Standard Time", "(UTC+04:30) Kabul"),
    ("Alaskan Standard Time", "(UTC-09:00) Alaska"),
    ("Aleutian Standard Time", "(UTC-10:00) Aleutian Islands"),
    ("Altai Standard Time", "(UTC+07:00) Barnaul, Gorno-Altaysk"),
    ("Arab Standard Time", "(UTC+03:00) Kuwait, Riyadh"),
    ("Arabian Standard Time", "(UTC+04:00) Abu Dhabi, Muscat"),
    ("Arabic Standard Time", "(UTC+03:00) Baghdad"),
    ("Argentina Standard Time", "(UTC-03:00) City of Buenos Aires"),
    ("Astrakhan Standard Time", "(UTC+04:00) Astrakhan, Ulyanovsk"),
    ("Atlantic Standard Time", "(UTC-04:00) Atlantic Time (Canada)"),
    ("Aus Central W. Standard Time", "(UTC+08:45) Eucla"),
    ("Azerbaijan Standard Time", "(UTC+04:00) Baku"),
    ("Azores Standard Time", "(UTC-01:00) Azores"),
    ("Bahia Standard Time", "(UTC-03:00) Salvador"),
    ("Bangladesh Standard Time", "(UTC+06:00) Dhaka"),
    ("Belarus Standard Time", "(UTC+03:00) Minsk"),
    ("Bougainville Standard Time", "(UTC+11:00) Bougainville Island"),
    ("Canada Central Standard Time", "(UTC-06:00) Saskatchewan"),
    ("Cape Verde Standard Time", "(UTC-01:00) Cabo Verde Is."),
    ("Caucasus Standard Time", "(UTC+04:00) Yerevan"),
    ("Cen. Australia Standard Time", "(UTC+09:30) Adelaide"),
    ("Central America Standard Time", "(UTC-06:00) Central America"),
    ("Central Asia Standard Time", "(UTC+06:00) Astana"),
    ("Central Brazilian Standard Time", "(UTC-04:00) Cuiaba"),
    ("Central Europe Standard Time", "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague"),
    ("Central European Standard Time", "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb"),
    ("Central Pacific Standard Time", "(UTC+11:00) Solomon Is., New Caledonia"),
    ("Central Standard Time", "(UTC-06:00) Central Time (US & Canada)"),
    ("Central Standard Time (Mexico)", "(UTC-06:00) Guadalajara, Mexico City, Monterrey"),
    ("Chatham Islands Standard Time", "(UTC+12:45) Chatham Islands"),
    ("China Standard Time", "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi"),
    ("Cuba Standard Time", "(UTC-05:00) Havana"),
    ("Dateline Standard Time", "(UTC-12:00) International Date Line West"),
    ("E. Africa Standard Time", "(UTC+03:00) Nairobi"),
    ("E. Australia Standard Time", "(UTC+10:00) Brisbane"),
    ("E. Europe Standard Time", "(UTC+02:00) Chisinau"),
    ("E. South America Standard Time", "(UTC-03:00) Brasilia"),
    ("Easter Island Standard Time", "(UTC-06:00) Easter Island"),
    ("Eastern Standard Time", "(UTC-05:00) Eastern Time (US & Canada)"),
    ("Eastern Standard Time (Mexico)", "(UTC-05:00) Chetumal"),
    ("Egypt Standard Time", "(UTC+02:00) Cairo"),
    ("Ekaterinburg Standard Time", "(UTC+05:00) Ekaterinburg"),
    ("FLE Standard Time", "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius"),
    ("Fiji Standard Time", "(UTC+12:00) Fiji"),
    ("GMT Standard Time", "(UTC+00:00) Dublin, Edinburgh, Lisbon, London"),
    ("GTB Standard Time", "(UTC+02:00) Athens, Bucharest"),
    ("Georgian Standard Time", "(UTC+04:00) Tbilisi"),
    ("Greenland Standard Time", "(UTC-02:00) Greenland"),
    ("Greenwich Standard Time", "(UTC+00:00) Monrovia, Reykjavik"),
    ("Haiti Standard Time", "(UTC-05:00) Haiti"),
    ("Hawaiian Standard Time", "(UTC-10:00) Hawaii"),
    ("India Standard Time", "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi"),
    ("Iran Standard Time", "(UTC+03:30) Tehran"),
    ("Israel Standard Time", "(UTC+02:00) Jerusalem"),
    ("Jordan Standard Time", "(UTC+03:00) Amman"),
    ("Kaliningrad Standard Time", "(UTC+02:00) Kaliningrad"),
    ("Korea Standard Time", "(UTC+09:00) Seoul"),
    ("Libya Standard Time", "(UTC+02:00) Tripoli"),
    ("Line Islands Standard Time", "(UTC+14:00) Kiritimati Island"),
    ("Lord Howe Standard Time", "(UTC+10:30) Lord Howe Island"),
    ("Magadan Standard Time", "(UTC+11:00) Magadan"),
    ("Magallanes Standard Time", "(UTC-03:00) Punta Arenas"),
    ("Marquesas Standard Time", "(UTC-09:30) Marquesas Islands"),
    ("Mauritius Standard Time", "(UTC+04:00) Port Louis"),
    ("Middle East Standard Time", "(UTC+02:00) Beirut"),
    ("Montevideo Standard Time", "(UTC-03:00) Montevideo"),
    ("Morocco Standard Time", "(UTC+01:00) Casablanca"),
    ("Mountain Standard Time", "(UTC-07:00) Mountain Time (US & Canada)"),
    ("Mountain Standard Time (Mexico)", "(UTC-07:00) La Paz, Mazatlan"),
    ("Myanmar Standard Time", "(UTC+06:30) Yangon (Rangoon)"),
    ("N. Central Asia Standard Time", "(UTC+07:00) Novosibirsk"),
    ("Namibia Standard Time", "(UTC+02:00) Windhoek"),
    ("Nepal Standard Time", "(UTC+05:45) Kathmandu"),
    ("New Zealand Standard Time", "(UTC+12:00) Auckland, Wellington"),
    ("Newfoundland Standard Time", "(UTC-03:30) Newfoundland"),
    ("Norfolk Standard Time", "(UTC+11:00) Norfolk Island"),
    ("North Asia East Standard Time", "(UTC+08:00) Irkutsk"),
    ("North Asia Standard Time", "(UTC+07:00) Krasnoyarsk"),
    ("North Korea Standard Time", "(UTC+09:00) Pyongyang"),
    ("Omsk Standard Time", "(UTC+06:00) Omsk"),
    ("Pacific SA Standard Time", "(UTC-04:00) Santiago"),
    ("Pacific Standard Time", "(UTC-08:00) Pacific Time (US & Canada)"),
    ("Pacific Standard Time (Mexico)", "(UTC-08:00) Baja California"),
    ("Pakistan Standard Time", "(UTC+05:00) Islamabad, Karachi"),
    ("Paraguay Standard Time", "(UTC-04:00) Asuncion"),
    ("Qyzylorda Standard Time", "(UTC+05:00) Qyzylorda"),
    ("Romance Standard Time", "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris"),
    ("Russia Time Zone 10", "(UTC+11:00) Chokurdakh"),
    ("Russia Time Zone 11", "(UTC+12:00) Anadyr, Petropavlovsk-Kamchatsky"),
    ("Russia Time Zone 3", "(UTC+04:00) Izhevsk, Samara"),
    ("Russian Standard Time", "(UTC+03:00) Moscow, St. Petersburg"),
    ("SA Eastern Standard Time", "(UTC-03:00) Cayenne, Fortaleza"),
    ("SA Pacific Standard Time", "(UTC-05:00) Bogota, Lima, Quito, Rio Branco"),
    ("SA Western Standard Time", "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan"),
    ("SE Asia Standard Time", "(UTC+07:00) Bangkok, Hanoi, Jakarta"),
    ("Saint Pierre Standard Time", "(UTC-03:00) Saint Pierre and Miquelon"),
    ("Sakhalin Standard Time", "(UTC+11:00) Sakhalin"),
    ("Samoa Standard Time", "(UTC+13:00) Samoa"),
    ("Sao Tome Standard Time", "(UTC+00:00) Sao Tome"),
    ("Saratov Standard Time", "(UTC+04:00) Saratov"),
    ("Singapore Standard Time", "(UTC+08:00) Kuala Lumpur, Singapore"),
    ("South Africa Standard Time", "(UTC+02:00) Harare, Pretoria"),
    ("South Sudan Standard Time", "(UTC+02:00) Juba"),
    ("Sri Lanka Standard Time", "(UTC+05:30) Sri Jayawardenepura"),
    ("Sudan Standard Time", "(UTC+02:00) Khartoum"),
    ("Syria Standard Time", "(UTC+03:00) Damascus"),
    ("Taipei Standard Time", "(UTC+08:00) Taipei"),
    ("Tasmania Standard Time", "(UTC+10:00) Hobart"),
    ("Tocantins Standard Time", "(UTC-03:00) Araguaina"),
    ("Tokyo Standard Time", "(UTC+09:00) Osaka, Sapporo, Tokyo"),
    ("Tomsk Standard Time", "(UTC+07:00) Tomsk"),
    ("Tonga Standard Time", "(UTC+13:00) Nuku'alofa"),
    ("Transbaikal Standard Time", "(UTC+09:00) Chita"),
    ("Turkey Standard Time", "(UTC+03:00) Istanbul"),
    ("Turks And Caicos Standard Time", "(UTC-05:00) Turks and Caicos"),
    ("US Eastern Standard Time", "(UTC-05:00) Indiana (East)"),
    ("US Mountain Standard Time", "(UTC-07:00) Arizona"),
    ("UTC", "(UTC) Coordinated Universal Time"),
    ("UTC+12", "(UTC+12:00) Coordinated Universal Time+12"),
    ("UTC+13", "(UTC+13:00) Coordinated Universal Time+13"),
    ("UTC-02", "(UTC-02:00) Coordinated Universal Time-02"),
    ("UTC-08", "(UTC-08:00) Coordinated Universal Time-08"),
    ("UTC-09", "(UTC-09:00) Coordinated Universal Time-09"),
    ("UTC-11", "(UTC-11:00) Coordinated Universal Time-11"),
    ("Ulaanbaatar Standard Time", "(UTC+08:00) Ulaanbaatar"),
    ("Venezuela Standard Time", "(UTC-04:00) Caracas"),
    ("Vladivostok Standard Time", "(UTC+10:00) Vladivostok"),
    ("Volgograd Standard Time", "(UTC+03:00) Volgograd"),
    ("W. Australia Standard Time", "(UTC+08:00) Perth"),
    ("W. Central Africa Standard Time", "(UTC+01:00) West Central Africa"),
    ("W. Europe Standard Time", "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"),
    ("W. Mongolia Standard Time", "(UTC+07:00) Hovd"),
    ("West Asia Standard Time", "(UTC+05:00) Ashgabat, Tashkent"),
    ("West Bank Standard Time", "(UTC+02:00) Gaza, Hebron"),
    ("West Pacific Standard Time", "(UTC+10:00) Guam, Port Moresby"),
    ("Yakutsk Standard Time", "(UTC+09:00) Yakutsk"),
    ("Yukon Standard Time", "(UTC-07:00) Yukon"),
];

/// POSIX-era zone names with no upstream row, sorted by name.
pub(crate) static POSIX_SUPPLEMENT: &[(&str, &str)] = &[
    ("CET", "W. Europe Standard Time"),
    ("EET", "E. Europe Standard Time"),
    ("EST", "SA Pacific Standard Time"),
    ("Factory", "UTC"),
    ("HST", "Hawaiian Standard Time"),
    ("MET", "W. Europe Standard Time"),
    ("MST", "US Mountain Standard Time"),
    ("WET", "GMT Standard Time"),
];
