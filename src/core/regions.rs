//! Static region data: all Indian states and union territories, plus the
//! representative city used to build city-specific source URLs.

pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

/// States whose representative city differs from the slugified state name.
/// Anything missing here falls through to `city_slug`'s derived form.
const STATE_CITIES: &[(&str, &str)] = &[
    ("Andhra Pradesh", "vijayawada"),
    ("Arunachal Pradesh", "itanagar"),
    ("Assam", "guwahati"),
    ("Bihar", "patna"),
    ("Chhattisgarh", "raipur"),
    ("Delhi", "new-delhi"),
    ("Goa", "panaji"),
    ("Gujarat", "ahmedabad"),
    ("Haryana", "gurgaon"),
    ("Himachal Pradesh", "shimla"),
    ("Jharkhand", "ranchi"),
    ("Karnataka", "bangalore"),
    ("Kerala", "thiruvananthapuram"),
    ("Madhya Pradesh", "bhopal"),
    ("Maharashtra", "mumbai"),
    ("Manipur", "imphal"),
    ("Meghalaya", "shillong"),
    ("Mizoram", "aizawl"),
    ("Nagaland", "kohima"),
    ("Odisha", "bhubaneswar"),
    ("Punjab", "ludhiana"),
    ("Rajasthan", "jaipur"),
    ("Sikkim", "gangtok"),
    ("Tamil Nadu", "chennai"),
    ("Telangana", "hyderabad"),
    ("Tripura", "agartala"),
    ("Uttar Pradesh", "lucknow"),
    ("Uttarakhand", "dehradun"),
    ("West Bengal", "kolkata"),
    ("Andaman and Nicobar Islands", "port-blair"),
    ("Dadra and Nagar Haveli and Daman and Diu", "daman"),
    ("Jammu and Kashmir", "srinagar"),
    ("Ladakh", "leh"),
    ("Lakshadweep", "kavaratti"),
];

/// Representative city slug for a state, used in city-specific source URLs.
pub fn city_slug(state: &str) -> String {
    STATE_CITIES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, city)| (*city).to_string())
        .unwrap_or_else(|| state.to_lowercase().replace(' ', "-"))
}
