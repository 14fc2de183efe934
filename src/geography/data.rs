//! Reference lists for Indian addresses.
//!
//! Entries are lowercase. Multi-word entries tolerate any whitespace between
//! words when matched. Earlier entries win when several match.

/// Lowest and highest valid Indian PIN codes (codes never start with 0 or 9).
pub const PIN_CODE_MIN: u32 = 100_000;
pub const PIN_CODE_MAX: u32 = 855_999;

pub const INDUSTRIAL_AREAS: &[&str] = &[
    // Authorities and named zones
    "sipcot",
    "sidco",
    "midc",
    "gidc",
    "kasez",
    "seepz",
    "nepz",
    "okhla",
    // Generic terms
    "industrial estate",
    "industrial area",
    "industrial zone",
    "industrial park",
    "industrial development area",
    "export processing zone",
    "special economic zone",
    "sez",
    "manufacturing zone",
    "production facility",
];

pub const MAJOR_CITIES: &[&str] = &[
    // Metros
    "mumbai",
    "delhi",
    "new delhi",
    "bangalore",
    "bengaluru",
    "hyderabad",
    "chennai",
    "madras",
    "kolkata",
    "calcutta",
    "pune",
    "ahmedabad",
    // Tier 1
    "surat",
    "jaipur",
    "lucknow",
    "kanpur",
    "nagpur",
    "indore",
    "thane",
    "bhopal",
    "visakhapatnam",
    "vizag",
    "pimpri",
    "chinchwad",
    "patna",
    "vadodara",
    "baroda",
    "ghaziabad",
    "ludhiana",
    "agra",
    "nashik",
    "faridabad",
    "meerut",
    "rajkot",
    "kalyan",
    "dombivli",
    "vasai",
    "virar",
    "varanasi",
    // Tier 2
    "srinagar",
    "aurangabad",
    "dhanbad",
    "amritsar",
    "navi mumbai",
    "allahabad",
    "prayagraj",
    "ranchi",
    "howrah",
    "coimbatore",
    "jabalpur",
    "gwalior",
    "vijayawada",
    "jodhpur",
    "madurai",
    "raipur",
    "kota",
    "chandigarh",
    "guwahati",
    "solapur",
    "tiruchirappalli",
    "trichy",
    "mysore",
    "mysuru",
    "bareilly",
    "aligarh",
    "tiruppur",
    "moradabad",
    "jalandhar",
    "bhubaneswar",
    "salem",
    "warangal",
    "guntur",
    "bhiwandi",
    "saharanpur",
    "gorakhpur",
    "bikaner",
    "amravati",
    "noida",
    "greater noida",
    "jamshedpur",
    "bhilai",
    "cuttack",
    "firozabad",
    "kochi",
    "cochin",
    "ernakulam",
    "nellore",
    "bhavnagar",
    "dehradun",
    "durgapur",
    "asansol",
    "rourkela",
    "nanded",
    "kolhapur",
    "ajmer",
    "akola",
    "gulbarga",
    "kalaburagi",
    "jamnagar",
    "ujjain",
    "loni",
    "siliguri",
    "jhansi",
    "ulhasnagar",
    "mangalore",
    "mangaluru",
    "erode",
    "belgaum",
    "belagavi",
    "hubli",
    "dharwad",
    "ambattur",
    "tirunelveli",
    "malegaon",
    "gaya",
    "thiruvananthapuram",
    "trivandrum",
    "kozhikode",
    "calicut",
    "thrissur",
    // Manufacturing hubs
    "vapi",
    "silvassa",
    "ankleshwar",
    "bharuch",
    "valsad",
    "panipat",
    "sonipat",
    "rohtak",
    "bahadurgarh",
    "gurgaon",
    "gurugram",
    "manesar",
    "neemrana",
    "bhiwadi",
    "alwar",
    "udaipur",
    "sanganer",
    "pithampur",
    "dewas",
    "mandideep",
    "hoshangabad",
    "halol",
    "himmatnagar",
    "mehsana",
    "palanpur",
    "gandhidham",
    "mundra",
    "sriperumbudur",
    "oragadam",
    "irungattukottai",
    "hosur",
    "krishnagiri",
    "ranipet",
    "ambur",
    "vellore",
    "karur",
    "namakkal",
    "dindigul",
    "thoothukudi",
    "tuticorin",
    "nagercoil",
    "rajapalayam",
    "pollachi",
    "sivakasi",
    "baddi",
    "haridwar",
    "rudrapur",
    "sricity",
    "sri city",
    "tumkur",
    "tumakuru",
    "peenya",
    "whitefield",
    "ghatkesar",
    "sanand",
    "morbi",
];

pub const STATES: &[&str] = &[
    // States
    "andhra pradesh",
    "arunachal pradesh",
    "assam",
    "bihar",
    "chhattisgarh",
    "goa",
    "gujarat",
    "haryana",
    "himachal pradesh",
    "jharkhand",
    "karnataka",
    "kerala",
    "madhya pradesh",
    "maharashtra",
    "manipur",
    "meghalaya",
    "mizoram",
    "nagaland",
    "odisha",
    "orissa",
    "punjab",
    "rajasthan",
    "sikkim",
    "tamil nadu",
    "telangana",
    "tripura",
    "uttar pradesh",
    "uttarakhand",
    "uttaranchal",
    "west bengal",
    // Union territories and their fragments
    "andaman and nicobar islands",
    "andaman",
    "nicobar",
    "chandigarh",
    "dadra and nagar haveli",
    "dadra",
    "nagar haveli",
    "daman and diu",
    "daman",
    "diu",
    "delhi",
    "jammu and kashmir",
    "jammu",
    "kashmir",
    "ladakh",
    "lakshadweep",
    "puducherry",
    "pondicherry",
];
