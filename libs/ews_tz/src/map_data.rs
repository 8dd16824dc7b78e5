//! Generated by the `ews-winzone` tool from the CLDR windowsZones document.
//! Do not edit by hand; rerun the tool to refresh.

use crate::map::WinZoneEntry;

/// `typeVersion` of the upstream document this table was generated from.
pub const CLDR_WINZONE_TYPE_VERSION: &str = "2025b";
/// `otherVersion` of the upstream document this table was generated from.
pub const CLDR_WINZONE_OTHER_VERSION: &str = "7e11900";

/// IANA key to Windows zone, sorted by key for binary search.
pub(crate) static WINZONE_MAP: &[WinZoneEntry] = &[
    WinZoneEntry { iana: "Africa/Abidjan", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Accra", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Addis_Ababa", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Algiers", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Asmara", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Asmera", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Bamako", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Bangui", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Banjul", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Bissau", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Blantyre", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Brazzaville", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Bujumbura", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Cairo", windows_id: "Egypt Standard Time", windows_name: "(UTC+02:00) Cairo" },
    WinZoneEntry { iana: "Africa/Casablanca", windows_id: "Morocco Standard Time", windows_name: "(UTC+01:00) Casablanca" },
    WinZoneEntry { iana: "Africa/Ceuta", windows_id: "Romance Standard Time", windows_name: "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris" },
    WinZoneEntry { iana: "Africa/Conakry", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Dakar", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Dar_es_Salaam", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Djibouti", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Douala", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/El_Aaiun", windows_id: "Morocco Standard Time", windows_name: "(UTC+01:00) Casablanca" },
    WinZoneEntry { iana: "Africa/Freetown", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Gaborone", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Harare", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Johannesburg", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Juba", windows_id: "South Sudan Standard Time", windows_name: "(UTC+02:00) Juba" },
    WinZoneEntry { iana: "Africa/Kampala", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Khartoum", windows_id: "Sudan Standard Time", windows_name: "(UTC+02:00) Khartoum" },
    WinZoneEntry { iana: "Africa/Kigali", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Kinshasa", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Lagos", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Libreville", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Lome", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Luanda", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Lubumbashi", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Lusaka", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Malabo", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Maputo", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Maseru", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Mbabane", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Africa/Mogadishu", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Monrovia", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Nairobi", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Africa/Ndjamena", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Niamey", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Nouakchott", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Ouagadougou", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Porto-Novo", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Sao_Tome", windows_id: "Sao Tome Standard Time", windows_name: "(UTC+00:00) Sao Tome" },
    WinZoneEntry { iana: "Africa/Timbuktu", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Africa/Tripoli", windows_id: "Libya Standard Time", windows_name: "(UTC+02:00) Tripoli" },
    WinZoneEntry { iana: "Africa/Tunis", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Africa/Windhoek", windows_id: "Namibia Standard Time", windows_name: "(UTC+02:00) Windhoek" },
    WinZoneEntry { iana: "America/Adak", windows_id: "Aleutian Standard Time", windows_name: "(UTC-10:00) Aleutian Islands" },
    WinZoneEntry { iana: "America/Anchorage", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "America/Anguilla", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Antigua", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Araguaina", windows_id: "Tocantins Standard Time", windows_name: "(UTC-03:00) Araguaina" },
    WinZoneEntry { iana: "America/Argentina/Buenos_Aires", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Catamarca", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/ComodRivadavia", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Cordoba", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Jujuy", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/La_Rioja", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Mendoza", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Rio_Gallegos", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Salta", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/San_Juan", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/San_Luis", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Tucuman", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Argentina/Ushuaia", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Aruba", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Asuncion", windows_id: "Paraguay Standard Time", windows_name: "(UTC-04:00) Asuncion" },
    WinZoneEntry { iana: "America/Atikokan", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Atka", windows_id: "Aleutian Standard Time", windows_name: "(UTC-10:00) Aleutian Islands" },
    WinZoneEntry { iana: "America/Bahia", windows_id: "Bahia Standard Time", windows_name: "(UTC-03:00) Salvador" },
    WinZoneEntry { iana: "America/Bahia_Banderas", windows_id: "Central Standard Time (Mexico)", windows_name: "(UTC-06:00) Guadalajara, Mexico City, Monterrey" },
    WinZoneEntry { iana: "America/Barbados", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Belem", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Belize", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "America/Blanc-Sablon", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Boa_Vista", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Bogota", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Boise", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Buenos_Aires", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Cambridge_Bay", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Campo_Grande", windows_id: "Central Brazilian Standard Time", windows_name: "(UTC-04:00) Cuiaba" },
    WinZoneEntry { iana: "America/Cancun", windows_id: "Eastern Standard Time (Mexico)", windows_name: "(UTC-05:00) Chetumal" },
    WinZoneEntry { iana: "America/Caracas", windows_id: "Venezuela Standard Time", windows_name: "(UTC-04:00) Caracas" },
    WinZoneEntry { iana: "America/Catamarca", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Cayenne", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Cayman", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Chicago", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Chihuahua", windows_id: "Central Standard Time (Mexico)", windows_name: "(UTC-06:00) Guadalajara, Mexico City, Monterrey" },
    WinZoneEntry { iana: "America/Ciudad_Juarez", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Coral_Harbour", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Cordoba", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Costa_Rica", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "America/Coyhaique", windows_id: "Magallanes Standard Time", windows_name: "(UTC-03:00) Punta Arenas" },
    WinZoneEntry { iana: "America/Creston", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "America/Cuiaba", windows_id: "Central Brazilian Standard Time", windows_name: "(UTC-04:00) Cuiaba" },
    WinZoneEntry { iana: "America/Curacao", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Danmarkshavn", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "America/Dawson", windows_id: "Yukon Standard Time", windows_name: "(UTC-07:00) Yukon" },
    WinZoneEntry { iana: "America/Dawson_Creek", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "America/Denver", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Detroit", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Dominica", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Edmonton", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Eirunepe", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/El_Salvador", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "America/Ensenada", windows_id: "Pacific Standard Time (Mexico)", windows_name: "(UTC-08:00) Baja California" },
    WinZoneEntry { iana: "America/Fort_Nelson", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "America/Fort_Wayne", windows_id: "US Eastern Standard Time", windows_name: "(UTC-05:00) Indiana (East)" },
    WinZoneEntry { iana: "America/Fortaleza", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Glace_Bay", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "America/Godthab", windows_id: "Greenland Standard Time", windows_name: "(UTC-02:00) Greenland" },
    WinZoneEntry { iana: "America/Goose_Bay", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "America/Grand_Turk", windows_id: "Turks And Caicos Standard Time", windows_name: "(UTC-05:00) Turks and Caicos" },
    WinZoneEntry { iana: "America/Grenada", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Guadeloupe", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Guatemala", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "America/Guayaquil", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Guyana", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Halifax", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "America/Havana", windows_id: "Cuba Standard Time", windows_name: "(UTC-05:00) Havana" },
    WinZoneEntry { iana: "America/Hermosillo", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "America/Indiana/Indianapolis", windows_id: "US Eastern Standard Time", windows_name: "(UTC-05:00) Indiana (East)" },
    WinZoneEntry { iana: "America/Indiana/Knox", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Indiana/Marengo", windows_id: "US Eastern Standard Time", windows_name: "(UTC-05:00) Indiana (East)" },
    WinZoneEntry { iana: "America/Indiana/Petersburg", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Indiana/Tell_City", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Indiana/Vevay", windows_id: "US Eastern Standard Time", windows_name: "(UTC-05:00) Indiana (East)" },
    WinZoneEntry { iana: "America/Indiana/Vincennes", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Indiana/Winamac", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Indianapolis", windows_id: "US Eastern Standard Time", windows_name: "(UTC-05:00) Indiana (East)" },
    WinZoneEntry { iana: "America/Inuvik", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Iqaluit", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Jamaica", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Jujuy", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Juneau", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "America/Kentucky/Louisville", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Kentucky/Monticello", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Knox_IN", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Kralendijk", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/La_Paz", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Lima", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Los_Angeles", windows_id: "Pacific Standard Time", windows_name: "(UTC-08:00) Pacific Time (US & Canada)" },
    WinZoneEntry { iana: "America/Louisville", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Lower_Princes", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Maceio", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Managua", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "America/Manaus", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Marigot", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Martinique", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Matamoros", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Mazatlan", windows_id: "Mountain Standard Time (Mexico)", windows_name: "(UTC-07:00) La Paz, Mazatlan" },
    WinZoneEntry { iana: "America/Mendoza", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Menominee", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Merida", windows_id: "Central Standard Time (Mexico)", windows_name: "(UTC-06:00) Guadalajara, Mexico City, Monterrey" },
    WinZoneEntry { iana: "America/Metlakatla", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "America/Mexico_City", windows_id: "Central Standard Time (Mexico)", windows_name: "(UTC-06:00) Guadalajara, Mexico City, Monterrey" },
    WinZoneEntry { iana: "America/Miquelon", windows_id: "Saint Pierre Standard Time", windows_name: "(UTC-03:00) Saint Pierre and Miquelon" },
    WinZoneEntry { iana: "America/Moncton", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "America/Monterrey", windows_id: "Central Standard Time (Mexico)", windows_name: "(UTC-06:00) Guadalajara, Mexico City, Monterrey" },
    WinZoneEntry { iana: "America/Montevideo", windows_id: "Montevideo Standard Time", windows_name: "(UTC-03:00) Montevideo" },
    WinZoneEntry { iana: "America/Montreal", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Montserrat", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Nassau", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/New_York", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Nipigon", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Nome", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "America/Noronha", windows_id: "UTC-02", windows_name: "(UTC-02:00) Coordinated Universal Time-02" },
    WinZoneEntry { iana: "America/North_Dakota/Beulah", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/North_Dakota/Center", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/North_Dakota/New_Salem", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Nuuk", windows_id: "Greenland Standard Time", windows_name: "(UTC-02:00) Greenland" },
    WinZoneEntry { iana: "America/Ojinaga", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Panama", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Pangnirtung", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Paramaribo", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Phoenix", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "America/Port-au-Prince", windows_id: "Haiti Standard Time", windows_name: "(UTC-05:00) Haiti" },
    WinZoneEntry { iana: "America/Port_of_Spain", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Porto_Acre", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Porto_Velho", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Puerto_Rico", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Punta_Arenas", windows_id: "Magallanes Standard Time", windows_name: "(UTC-03:00) Punta Arenas" },
    WinZoneEntry { iana: "America/Rainy_River", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Rankin_Inlet", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Recife", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Regina", windows_id: "Canada Central Standard Time", windows_name: "(UTC-06:00) Saskatchewan" },
    WinZoneEntry { iana: "America/Resolute", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Rio_Branco", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "America/Rosario", windows_id: "Argentina Standard Time", windows_name: "(UTC-03:00) City of Buenos Aires" },
    WinZoneEntry { iana: "America/Santa_Isabel", windows_id: "Pacific Standard Time (Mexico)", windows_name: "(UTC-08:00) Baja California" },
    WinZoneEntry { iana: "America/Santarem", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "America/Santiago", windows_id: "Pacific SA Standard Time", windows_name: "(UTC-04:00) Santiago" },
    WinZoneEntry { iana: "America/Santo_Domingo", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Sao_Paulo", windows_id: "E. South America Standard Time", windows_name: "(UTC-03:00) Brasilia" },
    WinZoneEntry { iana: "America/Scoresbysund", windows_id: "Azores Standard Time", windows_name: "(UTC-01:00) Azores" },
    WinZoneEntry { iana: "America/Shiprock", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "America/Sitka", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "America/St_Barthelemy", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/St_Johns", windows_id: "Newfoundland Standard Time", windows_name: "(UTC-03:30) Newfoundland" },
    WinZoneEntry { iana: "America/St_Kitts", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/St_Lucia", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/St_Thomas", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/St_Vincent", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Swift_Current", windows_id: "Canada Central Standard Time", windows_name: "(UTC-06:00) Saskatchewan" },
    WinZoneEntry { iana: "America/Tegucigalpa", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "America/Thule", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "America/Thunder_Bay", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Tijuana", windows_id: "Pacific Standard Time (Mexico)", windows_name: "(UTC-08:00) Baja California" },
    WinZoneEntry { iana: "America/Toronto", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "America/Tortola", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Vancouver", windows_id: "Pacific Standard Time", windows_name: "(UTC-08:00) Pacific Time (US & Canada)" },
    WinZoneEntry { iana: "America/Virgin", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "America/Whitehorse", windows_id: "Yukon Standard Time", windows_name: "(UTC-07:00) Yukon" },
    WinZoneEntry { iana: "America/Winnipeg", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "America/Yakutat", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "America/Yellowknife", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "Antarctica/Casey", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Antarctica/Davis", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Antarctica/DumontDUrville", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Antarctica/Macquarie", windows_id: "Tasmania Standard Time", windows_name: "(UTC+10:00) Hobart" },
    WinZoneEntry { iana: "Antarctica/Mawson", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Antarctica/McMurdo", windows_id: "New Zealand Standard Time", windows_name: "(UTC+12:00) Auckland, Wellington" },
    WinZoneEntry { iana: "Antarctica/Palmer", windows_id: "Magallanes Standard Time", windows_name: "(UTC-03:00) Punta Arenas" },
    WinZoneEntry { iana: "Antarctica/Rothera", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "Antarctica/South_Pole", windows_id: "New Zealand Standard Time", windows_name: "(UTC+12:00) Auckland, Wellington" },
    WinZoneEntry { iana: "Antarctica/Syowa", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Antarctica/Troll", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Antarctica/Vostok", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Arctic/Longyearbyen", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Asia/Aden", windows_id: "Arab Standard Time", windows_name: "(UTC+03:00) Kuwait, Riyadh" },
    WinZoneEntry { iana: "Asia/Almaty", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Amman", windows_id: "Jordan Standard Time", windows_name: "(UTC+03:00) Amman" },
    WinZoneEntry { iana: "Asia/Anadyr", windows_id: "Russia Time Zone 11", windows_name: "(UTC+12:00) Anadyr, Petropavlovsk-Kamchatsky" },
    WinZoneEntry { iana: "Asia/Aqtau", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Aqtobe", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Ashgabat", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Ashkhabad", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Atyrau", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Baghdad", windows_id: "Arabic Standard Time", windows_name: "(UTC+03:00) Baghdad" },
    WinZoneEntry { iana: "Asia/Bahrain", windows_id: "Arab Standard Time", windows_name: "(UTC+03:00) Kuwait, Riyadh" },
    WinZoneEntry { iana: "Asia/Baku", windows_id: "Azerbaijan Standard Time", windows_name: "(UTC+04:00) Baku" },
    WinZoneEntry { iana: "Asia/Bangkok", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Barnaul", windows_id: "Altai Standard Time", windows_name: "(UTC+07:00) Barnaul, Gorno-Altaysk" },
    WinZoneEntry { iana: "Asia/Beirut", windows_id: "Middle East Standard Time", windows_name: "(UTC+02:00) Beirut" },
    WinZoneEntry { iana: "Asia/Bishkek", windows_id: "Central Asia Standard Time", windows_name: "(UTC+06:00) Astana" },
    WinZoneEntry { iana: "Asia/Brunei", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Calcutta", windows_id: "India Standard Time", windows_name: "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi" },
    WinZoneEntry { iana: "Asia/Chita", windows_id: "Transbaikal Standard Time", windows_name: "(UTC+09:00) Chita" },
    WinZoneEntry { iana: "Asia/Choibalsan", windows_id: "Ulaanbaatar Standard Time", windows_name: "(UTC+08:00) Ulaanbaatar" },
    WinZoneEntry { iana: "Asia/Chongqing", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Chungking", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Colombo", windows_id: "Sri Lanka Standard Time", windows_name: "(UTC+05:30) Sri Jayawardenepura" },
    WinZoneEntry { iana: "Asia/Dacca", windows_id: "Bangladesh Standard Time", windows_name: "(UTC+06:00) Dhaka" },
    WinZoneEntry { iana: "Asia/Damascus", windows_id: "Syria Standard Time", windows_name: "(UTC+03:00) Damascus" },
    WinZoneEntry { iana: "Asia/Dhaka", windows_id: "Bangladesh Standard Time", windows_name: "(UTC+06:00) Dhaka" },
    WinZoneEntry { iana: "Asia/Dili", windows_id: "Tokyo Standard Time", windows_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    WinZoneEntry { iana: "Asia/Dubai", windows_id: "Arabian Standard Time", windows_name: "(UTC+04:00) Abu Dhabi, Muscat" },
    WinZoneEntry { iana: "Asia/Dushanbe", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Famagusta", windows_id: "GTB Standard Time", windows_name: "(UTC+02:00) Athens, Bucharest" },
    WinZoneEntry { iana: "Asia/Gaza", windows_id: "West Bank Standard Time", windows_name: "(UTC+02:00) Gaza, Hebron" },
    WinZoneEntry { iana: "Asia/Harbin", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Hebron", windows_id: "West Bank Standard Time", windows_name: "(UTC+02:00) Gaza, Hebron" },
    WinZoneEntry { iana: "Asia/Ho_Chi_Minh", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Hong_Kong", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Hovd", windows_id: "W. Mongolia Standard Time", windows_name: "(UTC+07:00) Hovd" },
    WinZoneEntry { iana: "Asia/Irkutsk", windows_id: "North Asia East Standard Time", windows_name: "(UTC+08:00) Irkutsk" },
    WinZoneEntry { iana: "Asia/Istanbul", windows_id: "Turkey Standard Time", windows_name: "(UTC+03:00) Istanbul" },
    WinZoneEntry { iana: "Asia/Jakarta", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Jayapura", windows_id: "Tokyo Standard Time", windows_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    WinZoneEntry { iana: "Asia/Jerusalem", windows_id: "Israel Standard Time", windows_name: "(UTC+02:00) Jerusalem" },
    WinZoneEntry { iana: "Asia/Kabul", windows_id: "Afghanistan Standard Time", windows_name: "(UTC+04:30) Kabul" },
    WinZoneEntry { iana: "Asia/Kamchatka", windows_id: "Russia Time Zone 11", windows_name: "(UTC+12:00) Anadyr, Petropavlovsk-Kamchatsky" },
    WinZoneEntry { iana: "Asia/Karachi", windows_id: "Pakistan Standard Time", windows_name: "(UTC+05:00) Islamabad, Karachi" },
    WinZoneEntry { iana: "Asia/Kashgar", windows_id: "Central Asia Standard Time", windows_name: "(UTC+06:00) Astana" },
    WinZoneEntry { iana: "Asia/Kathmandu", windows_id: "Nepal Standard Time", windows_name: "(UTC+05:45) Kathmandu" },
    WinZoneEntry { iana: "Asia/Katmandu", windows_id: "Nepal Standard Time", windows_name: "(UTC+05:45) Kathmandu" },
    WinZoneEntry { iana: "Asia/Khandyga", windows_id: "Yakutsk Standard Time", windows_name: "(UTC+09:00) Yakutsk" },
    WinZoneEntry { iana: "Asia/Kolkata", windows_id: "India Standard Time", windows_name: "(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi" },
    WinZoneEntry { iana: "Asia/Krasnoyarsk", windows_id: "North Asia Standard Time", windows_name: "(UTC+07:00) Krasnoyarsk" },
    WinZoneEntry { iana: "Asia/Kuala_Lumpur", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Kuching", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Kuwait", windows_id: "Arab Standard Time", windows_name: "(UTC+03:00) Kuwait, Riyadh" },
    WinZoneEntry { iana: "Asia/Macao", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Macau", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Magadan", windows_id: "Magadan Standard Time", windows_name: "(UTC+11:00) Magadan" },
    WinZoneEntry { iana: "Asia/Makassar", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Manila", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Muscat", windows_id: "Arabian Standard Time", windows_name: "(UTC+04:00) Abu Dhabi, Muscat" },
    WinZoneEntry { iana: "Asia/Nicosia", windows_id: "GTB Standard Time", windows_name: "(UTC+02:00) Athens, Bucharest" },
    WinZoneEntry { iana: "Asia/Novokuznetsk", windows_id: "North Asia Standard Time", windows_name: "(UTC+07:00) Krasnoyarsk" },
    WinZoneEntry { iana: "Asia/Novosibirsk", windows_id: "N. Central Asia Standard Time", windows_name: "(UTC+07:00) Novosibirsk" },
    WinZoneEntry { iana: "Asia/Omsk", windows_id: "Omsk Standard Time", windows_name: "(UTC+06:00) Omsk" },
    WinZoneEntry { iana: "Asia/Oral", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Phnom_Penh", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Pontianak", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Pyongyang", windows_id: "North Korea Standard Time", windows_name: "(UTC+09:00) Pyongyang" },
    WinZoneEntry { iana: "Asia/Qatar", windows_id: "Arab Standard Time", windows_name: "(UTC+03:00) Kuwait, Riyadh" },
    WinZoneEntry { iana: "Asia/Qostanay", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Qyzylorda", windows_id: "Qyzylorda Standard Time", windows_name: "(UTC+05:00) Qyzylorda" },
    WinZoneEntry { iana: "Asia/Rangoon", windows_id: "Myanmar Standard Time", windows_name: "(UTC+06:30) Yangon (Rangoon)" },
    WinZoneEntry { iana: "Asia/Riyadh", windows_id: "Arab Standard Time", windows_name: "(UTC+03:00) Kuwait, Riyadh" },
    WinZoneEntry { iana: "Asia/Saigon", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Sakhalin", windows_id: "Sakhalin Standard Time", windows_name: "(UTC+11:00) Sakhalin" },
    WinZoneEntry { iana: "Asia/Samarkand", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Seoul", windows_id: "Korea Standard Time", windows_name: "(UTC+09:00) Seoul" },
    WinZoneEntry { iana: "Asia/Shanghai", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Asia/Singapore", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Srednekolymsk", windows_id: "Russia Time Zone 10", windows_name: "(UTC+11:00) Chokurdakh" },
    WinZoneEntry { iana: "Asia/Taipei", windows_id: "Taipei Standard Time", windows_name: "(UTC+08:00) Taipei" },
    WinZoneEntry { iana: "Asia/Tashkent", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Asia/Tbilisi", windows_id: "Georgian Standard Time", windows_name: "(UTC+04:00) Tbilisi" },
    WinZoneEntry { iana: "Asia/Tehran", windows_id: "Iran Standard Time", windows_name: "(UTC+03:30) Tehran" },
    WinZoneEntry { iana: "Asia/Tel_Aviv", windows_id: "Israel Standard Time", windows_name: "(UTC+02:00) Jerusalem" },
    WinZoneEntry { iana: "Asia/Thimbu", windows_id: "Bangladesh Standard Time", windows_name: "(UTC+06:00) Dhaka" },
    WinZoneEntry { iana: "Asia/Thimphu", windows_id: "Bangladesh Standard Time", windows_name: "(UTC+06:00) Dhaka" },
    WinZoneEntry { iana: "Asia/Tokyo", windows_id: "Tokyo Standard Time", windows_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    WinZoneEntry { iana: "Asia/Tomsk", windows_id: "Tomsk Standard Time", windows_name: "(UTC+07:00) Tomsk" },
    WinZoneEntry { iana: "Asia/Ujung_Pandang", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Asia/Ulaanbaatar", windows_id: "Ulaanbaatar Standard Time", windows_name: "(UTC+08:00) Ulaanbaatar" },
    WinZoneEntry { iana: "Asia/Ulan_Bator", windows_id: "Ulaanbaatar Standard Time", windows_name: "(UTC+08:00) Ulaanbaatar" },
    WinZoneEntry { iana: "Asia/Urumqi", windows_id: "Central Asia Standard Time", windows_name: "(UTC+06:00) Astana" },
    WinZoneEntry { iana: "Asia/Ust-Nera", windows_id: "Vladivostok Standard Time", windows_name: "(UTC+10:00) Vladivostok" },
    WinZoneEntry { iana: "Asia/Vientiane", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Asia/Vladivostok", windows_id: "Vladivostok Standard Time", windows_name: "(UTC+10:00) Vladivostok" },
    WinZoneEntry { iana: "Asia/Yakutsk", windows_id: "Yakutsk Standard Time", windows_name: "(UTC+09:00) Yakutsk" },
    WinZoneEntry { iana: "Asia/Yangon", windows_id: "Myanmar Standard Time", windows_name: "(UTC+06:30) Yangon (Rangoon)" },
    WinZoneEntry { iana: "Asia/Yekaterinburg", windows_id: "Ekaterinburg Standard Time", windows_name: "(UTC+05:00) Ekaterinburg" },
    WinZoneEntry { iana: "Asia/Yerevan", windows_id: "Caucasus Standard Time", windows_name: "(UTC+04:00) Yerevan" },
    WinZoneEntry { iana: "Atlantic/Azores", windows_id: "Azores Standard Time", windows_name: "(UTC-01:00) Azores" },
    WinZoneEntry { iana: "Atlantic/Bermuda", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "Atlantic/Canary", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Atlantic/Cape_Verde", windows_id: "Cape Verde Standard Time", windows_name: "(UTC-01:00) Cabo Verde Is." },
    WinZoneEntry { iana: "Atlantic/Faeroe", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Atlantic/Faroe", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Atlantic/Jan_Mayen", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Atlantic/Madeira", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Atlantic/Reykjavik", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Atlantic/South_Georgia", windows_id: "UTC-02", windows_name: "(UTC-02:00) Coordinated Universal Time-02" },
    WinZoneEntry { iana: "Atlantic/St_Helena", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Atlantic/Stanley", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "Australia/ACT", windows_id: "AUS Eastern Standard Time", windows_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    WinZoneEntry { iana: "Australia/Adelaide", windows_id: "Cen. Australia Standard Time", windows_name: "(UTC+09:30) Adelaide" },
    WinZoneEntry { iana: "Australia/Brisbane", windows_id: "E. Australia Standard Time", windows_name: "(UTC+10:00) Brisbane" },
    WinZoneEntry { iana: "Australia/Broken_Hill", windows_id: "Cen. Australia Standard Time", windows_name: "(UTC+09:30) Adelaide" },
    WinZoneEntry { iana: "Australia/Canberra", windows_id: "AUS Eastern Standard Time", windows_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    WinZoneEntry { iana: "Australia/Currie", windows_id: "Tasmania Standard Time", windows_name: "(UTC+10:00) Hobart" },
    WinZoneEntry { iana: "Australia/Darwin", windows_id: "AUS Central Standard Time", windows_name: "(UTC+09:30) Darwin" },
    WinZoneEntry { iana: "Australia/Eucla", windows_id: "Aus Central W. Standard Time", windows_name: "(UTC+08:45) Eucla" },
    WinZoneEntry { iana: "Australia/Hobart", windows_id: "Tasmania Standard Time", windows_name: "(UTC+10:00) Hobart" },
    WinZoneEntry { iana: "Australia/LHI", windows_id: "Lord Howe Standard Time", windows_name: "(UTC+10:30) Lord Howe Island" },
    WinZoneEntry { iana: "Australia/Lindeman", windows_id: "E. Australia Standard Time", windows_name: "(UTC+10:00) Brisbane" },
    WinZoneEntry { iana: "Australia/Lord_Howe", windows_id: "Lord Howe Standard Time", windows_name: "(UTC+10:30) Lord Howe Island" },
    WinZoneEntry { iana: "Australia/Melbourne", windows_id: "AUS Eastern Standard Time", windows_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    WinZoneEntry { iana: "Australia/NSW", windows_id: "AUS Eastern Standard Time", windows_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    WinZoneEntry { iana: "Australia/North", windows_id: "AUS Central Standard Time", windows_name: "(UTC+09:30) Darwin" },
    WinZoneEntry { iana: "Australia/Perth", windows_id: "W. Australia Standard Time", windows_name: "(UTC+08:00) Perth" },
    WinZoneEntry { iana: "Australia/Queensland", windows_id: "E. Australia Standard Time", windows_name: "(UTC+10:00) Brisbane" },
    WinZoneEntry { iana: "Australia/South", windows_id: "Cen. Australia Standard Time", windows_name: "(UTC+09:30) Adelaide" },
    WinZoneEntry { iana: "Australia/Sydney", windows_id: "AUS Eastern Standard Time", windows_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    WinZoneEntry { iana: "Australia/Tasmania", windows_id: "Tasmania Standard Time", windows_name: "(UTC+10:00) Hobart" },
    WinZoneEntry { iana: "Australia/Victoria", windows_id: "AUS Eastern Standard Time", windows_name: "(UTC+10:00) Canberra, Melbourne, Sydney" },
    WinZoneEntry { iana: "Australia/West", windows_id: "W. Australia Standard Time", windows_name: "(UTC+08:00) Perth" },
    WinZoneEntry { iana: "Australia/Yancowinna", windows_id: "Cen. Australia Standard Time", windows_name: "(UTC+09:30) Adelaide" },
    WinZoneEntry { iana: "Brazil/Acre", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "Brazil/DeNoronha", windows_id: "UTC-02", windows_name: "(UTC-02:00) Coordinated Universal Time-02" },
    WinZoneEntry { iana: "Brazil/East", windows_id: "E. South America Standard Time", windows_name: "(UTC-03:00) Brasilia" },
    WinZoneEntry { iana: "Brazil/West", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "CET", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "CST6CDT", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "Canada/Atlantic", windows_id: "Atlantic Standard Time", windows_name: "(UTC-04:00) Atlantic Time (Canada)" },
    WinZoneEntry { iana: "Canada/Central", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "Canada/Eastern", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "Canada/Mountain", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "Canada/Newfoundland", windows_id: "Newfoundland Standard Time", windows_name: "(UTC-03:30) Newfoundland" },
    WinZoneEntry { iana: "Canada/Pacific", windows_id: "Pacific Standard Time", windows_name: "(UTC-08:00) Pacific Time (US & Canada)" },
    WinZoneEntry { iana: "Canada/Saskatchewan", windows_id: "Canada Central Standard Time", windows_name: "(UTC-06:00) Saskatchewan" },
    WinZoneEntry { iana: "Canada/Yukon", windows_id: "Yukon Standard Time", windows_name: "(UTC-07:00) Yukon" },
    WinZoneEntry { iana: "Chile/Continental", windows_id: "Pacific SA Standard Time", windows_name: "(UTC-04:00) Santiago" },
    WinZoneEntry { iana: "Chile/EasterIsland", windows_id: "Easter Island Standard Time", windows_name: "(UTC-06:00) Easter Island" },
    WinZoneEntry { iana: "Cuba", windows_id: "Cuba Standard Time", windows_name: "(UTC-05:00) Havana" },
    WinZoneEntry { iana: "EET", windows_id: "E. Europe Standard Time", windows_name: "(UTC+02:00) Chisinau" },
    WinZoneEntry { iana: "EST", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "EST5EDT", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "Egypt", windows_id: "Egypt Standard Time", windows_name: "(UTC+02:00) Cairo" },
    WinZoneEntry { iana: "Eire", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Etc/GMT", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/GMT+0", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/GMT+1", windows_id: "Cape Verde Standard Time", windows_name: "(UTC-01:00) Cabo Verde Is." },
    WinZoneEntry { iana: "Etc/GMT+10", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "Etc/GMT+11", windows_id: "UTC-11", windows_name: "(UTC-11:00) Coordinated Universal Time-11" },
    WinZoneEntry { iana: "Etc/GMT+12", windows_id: "Dateline Standard Time", windows_name: "(UTC-12:00) International Date Line West" },
    WinZoneEntry { iana: "Etc/GMT+2", windows_id: "UTC-02", windows_name: "(UTC-02:00) Coordinated Universal Time-02" },
    WinZoneEntry { iana: "Etc/GMT+3", windows_id: "SA Eastern Standard Time", windows_name: "(UTC-03:00) Cayenne, Fortaleza" },
    WinZoneEntry { iana: "Etc/GMT+4", windows_id: "SA Western Standard Time", windows_name: "(UTC-04:00) Georgetown, La Paz, Manaus, San Juan" },
    WinZoneEntry { iana: "Etc/GMT+5", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "Etc/GMT+6", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "Etc/GMT+7", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "Etc/GMT+8", windows_id: "UTC-08", windows_name: "(UTC-08:00) Coordinated Universal Time-08" },
    WinZoneEntry { iana: "Etc/GMT+9", windows_id: "UTC-09", windows_name: "(UTC-09:00) Coordinated Universal Time-09" },
    WinZoneEntry { iana: "Etc/GMT-0", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/GMT-1", windows_id: "W. Central Africa Standard Time", windows_name: "(UTC+01:00) West Central Africa" },
    WinZoneEntry { iana: "Etc/GMT-10", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Etc/GMT-11", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Etc/GMT-12", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Etc/GMT-13", windows_id: "UTC+13", windows_name: "(UTC+13:00) Coordinated Universal Time+13" },
    WinZoneEntry { iana: "Etc/GMT-14", windows_id: "Line Islands Standard Time", windows_name: "(UTC+14:00) Kiritimati Island" },
    WinZoneEntry { iana: "Etc/GMT-2", windows_id: "South Africa Standard Time", windows_name: "(UTC+02:00) Harare, Pretoria" },
    WinZoneEntry { iana: "Etc/GMT-3", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Etc/GMT-4", windows_id: "Arabian Standard Time", windows_name: "(UTC+04:00) Abu Dhabi, Muscat" },
    WinZoneEntry { iana: "Etc/GMT-5", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Etc/GMT-6", windows_id: "Central Asia Standard Time", windows_name: "(UTC+06:00) Astana" },
    WinZoneEntry { iana: "Etc/GMT-7", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Etc/GMT-8", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Etc/GMT-9", windows_id: "Tokyo Standard Time", windows_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    WinZoneEntry { iana: "Etc/GMT0", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/Greenwich", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/UCT", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/UTC", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/Universal", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Etc/Zulu", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Europe/Amsterdam", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Andorra", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Astrakhan", windows_id: "Astrakhan Standard Time", windows_name: "(UTC+04:00) Astrakhan, Ulyanovsk" },
    WinZoneEntry { iana: "Europe/Athens", windows_id: "GTB Standard Time", windows_name: "(UTC+02:00) Athens, Bucharest" },
    WinZoneEntry { iana: "Europe/Belfast", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Belgrade", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/Berlin", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Bratislava", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/Brussels", windows_id: "Romance Standard Time", windows_name: "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris" },
    WinZoneEntry { iana: "Europe/Bucharest", windows_id: "GTB Standard Time", windows_name: "(UTC+02:00) Athens, Bucharest" },
    WinZoneEntry { iana: "Europe/Budapest", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/Busingen", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Chisinau", windows_id: "E. Europe Standard Time", windows_name: "(UTC+02:00) Chisinau" },
    WinZoneEntry { iana: "Europe/Copenhagen", windows_id: "Romance Standard Time", windows_name: "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris" },
    WinZoneEntry { iana: "Europe/Dublin", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Gibraltar", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Guernsey", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Helsinki", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Isle_of_Man", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Istanbul", windows_id: "Turkey Standard Time", windows_name: "(UTC+03:00) Istanbul" },
    WinZoneEntry { iana: "Europe/Jersey", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Kaliningrad", windows_id: "Kaliningrad Standard Time", windows_name: "(UTC+02:00) Kaliningrad" },
    WinZoneEntry { iana: "Europe/Kiev", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Kirov", windows_id: "Russian Standard Time", windows_name: "(UTC+03:00) Moscow, St. Petersburg" },
    WinZoneEntry { iana: "Europe/Kyiv", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Lisbon", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Ljubljana", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/London", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Europe/Luxembourg", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Madrid", windows_id: "Romance Standard Time", windows_name: "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris" },
    WinZoneEntry { iana: "Europe/Malta", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Mariehamn", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Minsk", windows_id: "Belarus Standard Time", windows_name: "(UTC+03:00) Minsk" },
    WinZoneEntry { iana: "Europe/Monaco", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Moscow", windows_id: "Russian Standard Time", windows_name: "(UTC+03:00) Moscow, St. Petersburg" },
    WinZoneEntry { iana: "Europe/Nicosia", windows_id: "GTB Standard Time", windows_name: "(UTC+02:00) Athens, Bucharest" },
    WinZoneEntry { iana: "Europe/Oslo", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Paris", windows_id: "Romance Standard Time", windows_name: "(UTC+01:00) Brussels, Copenhagen, Madrid, Paris" },
    WinZoneEntry { iana: "Europe/Podgorica", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/Prague", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/Riga", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Rome", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Samara", windows_id: "Russia Time Zone 3", windows_name: "(UTC+04:00) Izhevsk, Samara" },
    WinZoneEntry { iana: "Europe/San_Marino", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Sarajevo", windows_id: "Central European Standard Time", windows_name: "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" },
    WinZoneEntry { iana: "Europe/Saratov", windows_id: "Saratov Standard Time", windows_name: "(UTC+04:00) Saratov" },
    WinZoneEntry { iana: "Europe/Simferopol", windows_id: "Russian Standard Time", windows_name: "(UTC+03:00) Moscow, St. Petersburg" },
    WinZoneEntry { iana: "Europe/Skopje", windows_id: "Central European Standard Time", windows_name: "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" },
    WinZoneEntry { iana: "Europe/Sofia", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Stockholm", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Tallinn", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Tirane", windows_id: "Central Europe Standard Time", windows_name: "(UTC+01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague" },
    WinZoneEntry { iana: "Europe/Tiraspol", windows_id: "E. Europe Standard Time", windows_name: "(UTC+02:00) Chisinau" },
    WinZoneEntry { iana: "Europe/Ulyanovsk", windows_id: "Astrakhan Standard Time", windows_name: "(UTC+04:00) Astrakhan, Ulyanovsk" },
    WinZoneEntry { iana: "Europe/Uzhgorod", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Vaduz", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Vatican", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Vienna", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Europe/Vilnius", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Volgograd", windows_id: "Volgograd Standard Time", windows_name: "(UTC+03:00) Volgograd" },
    WinZoneEntry { iana: "Europe/Warsaw", windows_id: "Central European Standard Time", windows_name: "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" },
    WinZoneEntry { iana: "Europe/Zagreb", windows_id: "Central European Standard Time", windows_name: "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" },
    WinZoneEntry { iana: "Europe/Zaporozhye", windows_id: "FLE Standard Time", windows_name: "(UTC+02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius" },
    WinZoneEntry { iana: "Europe/Zurich", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "Factory", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "GB", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "GB-Eire", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "GMT", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "GMT+0", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "GMT-0", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "GMT0", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Greenwich", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "HST", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "Hongkong", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "Iceland", windows_id: "Greenwich Standard Time", windows_name: "(UTC+00:00) Monrovia, Reykjavik" },
    WinZoneEntry { iana: "Indian/Antananarivo", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Indian/Chagos", windows_id: "Central Asia Standard Time", windows_name: "(UTC+06:00) Astana" },
    WinZoneEntry { iana: "Indian/Christmas", windows_id: "SE Asia Standard Time", windows_name: "(UTC+07:00) Bangkok, Hanoi, Jakarta" },
    WinZoneEntry { iana: "Indian/Cocos", windows_id: "Myanmar Standard Time", windows_name: "(UTC+06:30) Yangon (Rangoon)" },
    WinZoneEntry { iana: "Indian/Comoro", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Indian/Kerguelen", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Indian/Mahe", windows_id: "Mauritius Standard Time", windows_name: "(UTC+04:00) Port Louis" },
    WinZoneEntry { iana: "Indian/Maldives", windows_id: "West Asia Standard Time", windows_name: "(UTC+05:00) Ashgabat, Tashkent" },
    WinZoneEntry { iana: "Indian/Mauritius", windows_id: "Mauritius Standard Time", windows_name: "(UTC+04:00) Port Louis" },
    WinZoneEntry { iana: "Indian/Mayotte", windows_id: "E. Africa Standard Time", windows_name: "(UTC+03:00) Nairobi" },
    WinZoneEntry { iana: "Indian/Reunion", windows_id: "Mauritius Standard Time", windows_name: "(UTC+04:00) Port Louis" },
    WinZoneEntry { iana: "Iran", windows_id: "Iran Standard Time", windows_name: "(UTC+03:30) Tehran" },
    WinZoneEntry { iana: "Israel", windows_id: "Israel Standard Time", windows_name: "(UTC+02:00) Jerusalem" },
    WinZoneEntry { iana: "Jamaica", windows_id: "SA Pacific Standard Time", windows_name: "(UTC-05:00) Bogota, Lima, Quito, Rio Branco" },
    WinZoneEntry { iana: "Japan", windows_id: "Tokyo Standard Time", windows_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    WinZoneEntry { iana: "Kwajalein", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Libya", windows_id: "Libya Standard Time", windows_name: "(UTC+02:00) Tripoli" },
    WinZoneEntry { iana: "MET", windows_id: "W. Europe Standard Time", windows_name: "(UTC+01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna" },
    WinZoneEntry { iana: "MST", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "MST7MDT", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "Mexico/BajaNorte", windows_id: "Pacific Standard Time (Mexico)", windows_name: "(UTC-08:00) Baja California" },
    WinZoneEntry { iana: "Mexico/BajaSur", windows_id: "Mountain Standard Time (Mexico)", windows_name: "(UTC-07:00) La Paz, Mazatlan" },
    WinZoneEntry { iana: "Mexico/General", windows_id: "Central Standard Time (Mexico)", windows_name: "(UTC-06:00) Guadalajara, Mexico City, Monterrey" },
    WinZoneEntry { iana: "NZ", windows_id: "New Zealand Standard Time", windows_name: "(UTC+12:00) Auckland, Wellington" },
    WinZoneEntry { iana: "NZ-CHAT", windows_id: "Chatham Islands Standard Time", windows_name: "(UTC+12:45) Chatham Islands" },
    WinZoneEntry { iana: "Navajo", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "PRC", windows_id: "China Standard Time", windows_name: "(UTC+08:00) Beijing, Chongqing, Hong Kong, Urumqi" },
    WinZoneEntry { iana: "PST8PDT", windows_id: "Pacific Standard Time", windows_name: "(UTC-08:00) Pacific Time (US & Canada)" },
    WinZoneEntry { iana: "Pacific/Apia", windows_id: "Samoa Standard Time", windows_name: "(UTC+13:00) Samoa" },
    WinZoneEntry { iana: "Pacific/Auckland", windows_id: "New Zealand Standard Time", windows_name: "(UTC+12:00) Auckland, Wellington" },
    WinZoneEntry { iana: "Pacific/Bougainville", windows_id: "Bougainville Standard Time", windows_name: "(UTC+11:00) Bougainville Island" },
    WinZoneEntry { iana: "Pacific/Chatham", windows_id: "Chatham Islands Standard Time", windows_name: "(UTC+12:45) Chatham Islands" },
    WinZoneEntry { iana: "Pacific/Chuuk", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Pacific/Easter", windows_id: "Easter Island Standard Time", windows_name: "(UTC-06:00) Easter Island" },
    WinZoneEntry { iana: "Pacific/Efate", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Pacific/Enderbury", windows_id: "UTC+13", windows_name: "(UTC+13:00) Coordinated Universal Time+13" },
    WinZoneEntry { iana: "Pacific/Fakaofo", windows_id: "UTC+13", windows_name: "(UTC+13:00) Coordinated Universal Time+13" },
    WinZoneEntry { iana: "Pacific/Fiji", windows_id: "Fiji Standard Time", windows_name: "(UTC+12:00) Fiji" },
    WinZoneEntry { iana: "Pacific/Funafuti", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Galapagos", windows_id: "Central America Standard Time", windows_name: "(UTC-06:00) Central America" },
    WinZoneEntry { iana: "Pacific/Gambier", windows_id: "UTC-09", windows_name: "(UTC-09:00) Coordinated Universal Time-09" },
    WinZoneEntry { iana: "Pacific/Guadalcanal", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Pacific/Guam", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Pacific/Honolulu", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "Pacific/Johnston", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "Pacific/Kanton", windows_id: "UTC+13", windows_name: "(UTC+13:00) Coordinated Universal Time+13" },
    WinZoneEntry { iana: "Pacific/Kiritimati", windows_id: "Line Islands Standard Time", windows_name: "(UTC+14:00) Kiritimati Island" },
    WinZoneEntry { iana: "Pacific/Kosrae", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Pacific/Kwajalein", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Majuro", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Marquesas", windows_id: "Marquesas Standard Time", windows_name: "(UTC-09:30) Marquesas Islands" },
    WinZoneEntry { iana: "Pacific/Midway", windows_id: "UTC-11", windows_name: "(UTC-11:00) Coordinated Universal Time-11" },
    WinZoneEntry { iana: "Pacific/Nauru", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Niue", windows_id: "UTC-11", windows_name: "(UTC-11:00) Coordinated Universal Time-11" },
    WinZoneEntry { iana: "Pacific/Norfolk", windows_id: "Norfolk Standard Time", windows_name: "(UTC+11:00) Norfolk Island" },
    WinZoneEntry { iana: "Pacific/Noumea", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Pacific/Pago_Pago", windows_id: "UTC-11", windows_name: "(UTC-11:00) Coordinated Universal Time-11" },
    WinZoneEntry { iana: "Pacific/Palau", windows_id: "Tokyo Standard Time", windows_name: "(UTC+09:00) Osaka, Sapporo, Tokyo" },
    WinZoneEntry { iana: "Pacific/Pitcairn", windows_id: "UTC-08", windows_name: "(UTC-08:00) Coordinated Universal Time-08" },
    WinZoneEntry { iana: "Pacific/Pohnpei", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Pacific/Ponape", windows_id: "Central Pacific Standard Time", windows_name: "(UTC+11:00) Solomon Is., New Caledonia" },
    WinZoneEntry { iana: "Pacific/Port_Moresby", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Pacific/Rarotonga", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "Pacific/Saipan", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Pacific/Samoa", windows_id: "UTC-11", windows_name: "(UTC-11:00) Coordinated Universal Time-11" },
    WinZoneEntry { iana: "Pacific/Tahiti", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "Pacific/Tarawa", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Tongatapu", windows_id: "Tonga Standard Time", windows_name: "(UTC+13:00) Nuku'alofa" },
    WinZoneEntry { iana: "Pacific/Truk", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Pacific/Wake", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Wallis", windows_id: "UTC+12", windows_name: "(UTC+12:00) Coordinated Universal Time+12" },
    WinZoneEntry { iana: "Pacific/Yap", windows_id: "West Pacific Standard Time", windows_name: "(UTC+10:00) Guam, Port Moresby" },
    WinZoneEntry { iana: "Poland", windows_id: "Central European Standard Time", windows_name: "(UTC+01:00) Sarajevo, Skopje, Warsaw, Zagreb" },
    WinZoneEntry { iana: "Portugal", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "ROC", windows_id: "Taipei Standard Time", windows_name: "(UTC+08:00) Taipei" },
    WinZoneEntry { iana: "ROK", windows_id: "Korea Standard Time", windows_name: "(UTC+09:00) Seoul" },
    WinZoneEntry { iana: "Singapore", windows_id: "Singapore Standard Time", windows_name: "(UTC+08:00) Kuala Lumpur, Singapore" },
    WinZoneEntry { iana: "Turkey", windows_id: "Turkey Standard Time", windows_name: "(UTC+03:00) Istanbul" },
    WinZoneEntry { iana: "UCT", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "US/Alaska", windows_id: "Alaskan Standard Time", windows_name: "(UTC-09:00) Alaska" },
    WinZoneEntry { iana: "US/Aleutian", windows_id: "Aleutian Standard Time", windows_name: "(UTC-10:00) Aleutian Islands" },
    WinZoneEntry { iana: "US/Arizona", windows_id: "US Mountain Standard Time", windows_name: "(UTC-07:00) Arizona" },
    WinZoneEntry { iana: "US/Central", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "US/East-Indiana", windows_id: "US Eastern Standard Time", windows_name: "(UTC-05:00) Indiana (East)" },
    WinZoneEntry { iana: "US/Eastern", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "US/Hawaii", windows_id: "Hawaiian Standard Time", windows_name: "(UTC-10:00) Hawaii" },
    WinZoneEntry { iana: "US/Indiana-Starke", windows_id: "Central Standard Time", windows_name: "(UTC-06:00) Central Time (US & Canada)" },
    WinZoneEntry { iana: "US/Michigan", windows_id: "Eastern Standard Time", windows_name: "(UTC-05:00) Eastern Time (US & Canada)" },
    WinZoneEntry { iana: "US/Mountain", windows_id: "Mountain Standard Time", windows_name: "(UTC-07:00) Mountain Time (US & Canada)" },
    WinZoneEntry { iana: "US/Pacific", windows_id: "Pacific Standard Time", windows_name: "(UTC-08:00) Pacific Time (US & Canada)" },
    WinZoneEntry { iana: "US/Samoa", windows_id: "UTC-11", windows_name: "(UTC-11:00) Coordinated Universal Time-11" },
    WinZoneEntry { iana: "UTC", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "Universal", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
    WinZoneEntry { iana: "W-SU", windows_id: "Russian Standard Time", windows_name: "(UTC+03:00) Moscow, St. Petersburg" },
    WinZoneEntry { iana: "WET", windows_id: "GMT Standard Time", windows_name: "(UTC+00:00) Dublin, Edinburgh, Lisbon, London" },
    WinZoneEntry { iana: "Zulu", windows_id: "UTC", windows_name: "(UTC) Coordinated Universal Time" },
];

/// Windows zone to its world-region representative IANA key, sorted by id.
pub(crate) static WINZONE_REVERSE: &[(&str, &str)] = &[
    ("AUS Central Standard Time", "Australia/Darwin"),
    ("AUS Eastern Standard Time", "Australia/Sydney"),
    ("Afghanistan Standard Time", "Asia/Kabul"),
    ("Alaskan Standard Time", "America/Anchorage"),
    ("Aleutian Standard Time", "America/Adak"),
    ("Altai Standard Time", "Asia/Barnaul"),
    ("Arab Standard Time", "Asia/Riyadh"),
    ("Arabian Standard Time", "Asia/Dubai"),
    ("Arabic Standard Time", "Asia/Baghdad"),
    ("Argentina Standard Time", "America/Buenos_Aires"),
    ("Astrakhan Standard Time", "Europe/Astrakhan"),
    ("Atlantic Standard Time", "America/Halifax"),
    ("Aus Central W. Standard Time", "Australia/Eucla"),
    ("Azerbaijan Standard Time", "Asia/Baku"),
    ("Azores Standard Time", "Atlantic/Azores"),
    ("Bahia Standard Time", "America/Bahia"),
    ("Bangladesh Standard Time", "Asia/Dhaka"),
    ("Belarus Standard Time", "Europe/Minsk"),
    ("Bougainville Standard Time", "Pacific/Bougainville"),
    ("Canada Central Standard Time", "America/Regina"),
    ("Cape Verde Standard Time", "Atlantic/Cape_Verde"),
    ("Caucasus Standard Time", "Asia/Yerevan"),
    ("Cen. Australia Standard Time", "Australia/Adelaide"),
    ("Central America Standard Time", "America/Guatemala"),
    ("Central Asia Standard Time", "Asia/Bishkek"),
    ("Central Brazilian Standard Time", "America/Cuiaba"),
    ("Central Europe Standard Time", "Europe/Budapest"),
    ("Central European Standard Time", "Europe/Warsaw"),
    ("Central Pacific Standard Time", "Pacific/Guadalcanal"),
    ("Central Standard Time", "America/Chicago"),
    ("Central Standard Time (Mexico)", "America/Mexico_City"),
    ("Chatham Islands Standard Time", "Pacific/Chatham"),
    ("China Standard Time", "Asia/Shanghai"),
    ("Cuba Standard Time", "America/Havana"),
    ("Dateline Standard Time", "Etc/GMT+12"),
    ("E. Africa Standard Time", "Africa/Nairobi"),
    ("E. Australia Standard Time", "Australia/Brisbane"),
    ("E. Europe Standard Time", "Europe/Chisinau"),
    ("E. South America Standard Time", "America/Sao_Paulo"),
    ("Easter Island Standard Time", "Pacific/Easter"),
    ("Eastern Standard Time", "America/New_York"),
    ("Eastern Standard Time (Mexico)", "America/Cancun"),
    ("Egypt Standard Time", "Africa/Cairo"),
    ("Ekaterinburg Standard Time", "Asia/Yekaterinburg"),
    ("FLE Standard Time", "Europe/Kiev"),
    ("Fiji Standard Time", "Pacific/Fiji"),
    ("GMT Standard Time", "Europe/London"),
    ("GTB Standard Time", "Europe/Bucharest"),
    ("Georgian Standard Time", "Asia/Tbilisi"),
    ("Greenland Standard Time", "America/Godthab"),
    ("Greenwich Standard Time", "Atlantic/Reykjavik"),
    ("Haiti Standard Time", "America/Port-au-Prince"),
    ("Hawaiian Standard Time", "Pacific/Honolulu"),
    ("India Standard Time", "Asia/Calcutta"),
    ("Iran Standard Time", "Asia/Tehran"),
    ("Israel Standard Time", "Asia/Jerusalem"),
    ("Jordan Standard Time", "Asia/Amman"),
    ("Kaliningrad Standard Time", "Europe/Kaliningrad"),
    ("Korea Standard Time", "Asia/Seoul"),
    ("Libya Standard Time", "Africa/Tripoli"),
    ("Line Islands Standard Time", "Pacific/Kiritimati"),
    ("Lord Howe Standard Time", "Australia/Lord_Howe"),
    ("Magadan Standard Time", "Asia/Magadan"),
    ("Magallanes Standard Time", "America/Punta_Arenas"),
    ("Marquesas Standard Time", "Pacific/Marquesas"),
    ("Mauritius Standard Time", "Indian/Mauritius"),
    ("Middle East Standard Time", "Asia/Beirut"),
    ("Montevideo Standard Time", "America/Montevideo"),
    ("Morocco Standard Time", "Africa/Casablanca"),
    ("Mountain Standard Time", "America/Denver"),
    ("Mountain Standard Time (Mexico)", "America/Mazatlan"),
    ("Myanmar Standard Time", "Asia/Rangoon"),
    ("N. Central Asia Standard Time", "Asia/Novosibirsk"),
    ("Namibia Standard Time", "Africa/Windhoek"),
    ("Nepal Standard Time", "Asia/Katmandu"),
    ("New Zealand Standard Time", "Pacific/Auckland"),
    ("Newfoundland Standard Time", "America/St_Johns"),
    ("Norfolk Standard Time", "Pacific/Norfolk"),
    ("North Asia East Standard Time", "Asia/Irkutsk"),
    ("North Asia Standard Time", "Asia/Krasnoyarsk"),
    ("North Korea Standard Time", "Asia/Pyongyang"),
    ("Omsk Standard Time", "Asia/Omsk"),
    ("Pacific SA Standard Time", "America/Santiago"),
    ("Pacific Standard Time", "America/Los_Angeles"),
    ("Pacific Standard Time (Mexico)", "America/Tijuana"),
    ("Pakistan Standard Time", "Asia/Karachi"),
    ("Paraguay Standard Time", "America/Asuncion"),
    ("Qyzylorda Standard Time", "Asia/Qyzylorda"),
    ("Romance Standard Time", "Europe/Paris"),
    ("Russia Time Zone 10", "Asia/Srednekolymsk"),
    ("Russia Time Zone 11", "Asia/Kamchatka"),
    ("Russia Time Zone 3", "Europe/Samara"),
    ("Russian Standard Time", "Europe/Moscow"),
    ("SA Eastern Standard Time", "America/Cayenne"),
    ("SA Pacific Standard Time", "America/Bogota"),
    ("SA Western Standard Time", "America/La_Paz"),
    ("SE Asia Standard Time", "Asia/Bangkok"),
    ("Saint Pierre Standard Time", "America/Miquelon"),
    ("Sakhalin Standard Time", "Asia/Sakhalin"),
    ("Samoa Standard Time", "Pacific/Apia"),
    ("Sao Tome Standard Time", "Africa/Sao_Tome"),
    ("Saratov Standard Time", "Europe/Saratov"),
    ("Singapore Standard Time", "Asia/Singapore"),
    ("South Africa Standard Time", "Africa/Johannesburg"),
    ("South Sudan Standard Time", "Africa/Juba"),
    ("Sri Lanka Standard Time", "Asia/Colombo"),
    ("Sudan Standard Time", "Africa/Khartoum"),
    ("Syria Standard Time", "Asia/Damascus"),
    ("Taipei Standard Time", "Asia/Taipei"),
    ("Tasmania Standard Time", "Australia/Hobart"),
    ("Tocantins Standard Time", "America/Araguaina"),
    ("Tokyo Standard Time", "Asia/Tokyo"),
    ("Tomsk Standard Time", "Asia/Tomsk"),
    ("Tonga Standard Time", "Pacific/Tongatapu"),
    ("Transbaikal Standard Time", "Asia/Chita"),
    ("Turkey Standard Time", "Europe/Istanbul"),
    ("Turks And Caicos Standard Time", "America/Grand_Turk"),
    ("US Eastern Standard Time", "America/Indianapolis"),
    ("US Mountain Standard Time", "America/Phoenix"),
    ("UTC", "Etc/UTC"),
    ("UTC+12", "Etc/GMT-12"),
    ("UTC+13", "Etc/GMT-13"),
    ("UTC-02", "Etc/GMT+2"),
    ("UTC-08", "Etc/GMT+8"),
    ("UTC-09", "Etc/GMT+9"),
    ("UTC-11", "Etc/GMT+11"),
    ("Ulaanbaatar Standard Time", "Asia/Ulaanbaatar"),
    ("Venezuela Standard Time", "America/Caracas"),
    ("Vladivostok Standard Time", "Asia/Vladivostok"),
    ("Volgograd Standard Time", "Europe/Volgograd"),
    ("W. Australia Standard Time", "Australia/Perth"),
    ("W. Central Africa Standard Time", "Africa/Lagos"),
    ("W. Europe Standard Time", "Europe/Berlin"),
    ("W. Mongolia Standard Time", "Asia/Hovd"),
    ("West Asia Standard Time", "Asia/Tashkent"),
    ("West Bank Standard Time", "Asia/Hebron"),
    ("West Pacific Standard Time", "Pacific/Port_Moresby"),
    ("Yakutsk Standard Time", "Asia/Yakutsk"),
    ("Yukon Standard Time", "America/Whitehorse"),
];
