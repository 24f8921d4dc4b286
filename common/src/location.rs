//! # Location Catalogue
//!
//! Districts of Andhra Pradesh and the towns offered for each. Registration
//! input is validated against this table; search filters are not, so records
//! written before a rename still match on their stored text.

/// `(district, towns)` in the order the forms list them.
pub const DISTRICTS: &[(&str, &[&str])] = &[
    (
        "Alluri Sitharama Raju",
        &[
            "Paderu",
            "Araku Valley",
            "Chintapalle",
            "Rampachodavaram",
            "Addateegala",
            "Maredumilli",
            "G.Madugula",
            "Pedabayalu",
            "Munchingiputtu",
            "Ananthagiri",
        ],
    ),
    (
        "Anakapalli",
        &[
            "Anakapalli",
            "Narsipatnam",
            "Yellamanchili",
            "Chodavaram",
            "Madugula",
            "Paravada",
            "Sabbavaram",
            "Kasimkota",
            "Rambilli",
            "Atchutapuram",
        ],
    ),
    (
        "Anantapur",
        &[
            "Anantapur",
            "Guntakal",
            "Tadipatri",
            "Rayadurg",
            "Kalyandurg",
            "Singanamala",
            "Uravakonda",
            "Gooty",
            "Pamidi",
            "Atmakur",
        ],
    ),
    (
        "Annamayya",
        &[
            "Rayachoti",
            "Madanapalle",
            "Thamballapalle",
            "Pileru",
            "Rajampet",
            "Railway Koduru",
            "Valmikipuram",
            "Gurramkonda",
            "Kalakada",
            "Nimmanapalle",
        ],
    ),
    (
        "Bapatla",
        &[
            "Bapatla",
            "Chirala",
            "Addanki",
            "Parchur",
            "Repalle",
            "Vemuru",
            "Kollur",
            "Karamchedu",
            "Martur",
            "Chinaganjam",
        ],
    ),
    (
        "Chittoor",
        &[
            "Chittoor",
            "Palamaner",
            "Kuppam",
            "Punganur",
            "Nagari",
            "Gangadhara Nellore",
            "Puthalapattu",
            "Gudipala",
            "Yadamari",
            "Bangarupalem",
        ],
    ),
    (
        "Dr. B.R. Ambedkar Konaseema",
        &[
            "Amalapuram",
            "Kothapeta",
            "Ramachandrapuram",
            "Mummidivaram",
            "Razole",
            "P.Gannavaram",
            "Mandapeta",
            "Ravulapalem",
            "Atreyapuram",
            "Ainavilli",
        ],
    ),
    (
        "East Godavari",
        &[
            "Rjahmundry",
            "Rajanagaram",
            "Korukonda",
            "Gokavaram",
            "Seethanagaram",
            "Kadiyam",
            "Peravali",
            "Nidadavole",
            "Kovvur",
            "Tallapudi",
        ],
    ),
    (
        "Eluru",
        &[
            "Eluru",
            "Jangareddygudem",
            "Nuzvid",
            "Chintalapudi",
            "Polavaram",
            "Kaikalur",
            "Denduluru",
            "Bhimadole",
            "Unguturu",
            "Musunuru",
        ],
    ),
    (
        "Guntur",
        &[
            "Guntur",
            "Tenali",
            "Mangalagiri",
            "Ponnur",
            "Prathipadu",
            "Tadikonda",
            "Chebrolu",
            "Duggirala",
            "Kollipara",
            "Medikonduru",
            "Pedakakani",
        ],
    ),
    (
        "Kakinada",
        &[
            "Kakinada",
            "Peddapuram",
            "Pithapuram",
            "Tuni",
            "Samalkota",
            "Prathipadu",
            "Jaggampeta",
            "Karapa",
            "Thondangi",
            "U.Kothapalli",
        ],
    ),
    (
        "Krishna",
        &[
            "Machilipatnam",
            "Gudivada",
            "Pedana",
            "Pamarru",
            "Avanigadda",
            "Gannavaram",
            "Vuyyuru",
            "Kankipadu",
            "Penamaluru",
            "Movva",
        ],
    ),
    (
        "Kurnool",
        &[
            "Kurnool",
            "Adoni",
            "Yemmiganur",
            "Pattikonda",
            "Kodumur",
            "Mantralayam",
            "Alur",
            "Aspari",
            "Devanakonda",
            "Gonegandla",
        ],
    ),
    (
        "Nandyal",
        &[
            "Nandyal",
            "Allagadda",
            "Srisailam",
            "Nandikotkur",
            "Banaganapalle",
            "Dhone",
            "Panyam",
            "Atmakur",
            "Betamcherla",
            "Koilkuntla",
        ],
    ),
    (
        "NTR",
        &[
            "Vijayawada",
            "Jaggaiahpet",
            "Nandigama",
            "Mylavaram",
            "Tiruvuru",
            "Vissannapeta",
            "G.Konduru",
            "Ibrahimpatnam",
            "Kanchikacherla",
            "Chandarlapadu",
        ],
    ),
    (
        "Palnadu",
        &[
            "Narasaraopet",
            "Sattenapalle",
            "Vinukonda",
            "Gurazala",
            "Macherla",
            "Chilakaluripet",
            "Pedakurapadu",
            "Rompicherla",
            "Ipur",
            "Karempudi",
        ],
    ),
    (
        "Parvathipuram Manyam",
        &[
            "Parvathipuram",
            "Salur",
            "Palakonda",
            "Kurupam",
            "Jiyyammavalasa",
            "Garugubilli",
            "Makkuva",
            "Seethampeta",
            "Bhamini",
            "Veeraghattam",
        ],
    ),
    (
        "Prakasam",
        &[
            "Ongole",
            "Markapur",
            "Giddalur",
            "Kanigiri",
            "Yerragondapalem",
            "Darsi",
            "Kondapi",
            "Santhanuthalapadu",
            "Chimakurthy",
            "Podili",
        ],
    ),
    (
        "Sri Potti Sriramulu Nellore",
        &[
            "Nellore",
            "Kavali",
            "Atmakur",
            "Kovur",
            "Sarvepalli",
            "Udayagiri",
            "Kandukur",
            "Venkatagiri",
            "Buchireddypalem",
            "Indukurpet",
        ],
    ),
    (
        "Sri Sathya Sai",
        &[
            "Puttaparthi",
            "Hindupur",
            "Madakasira",
            "Penukonda",
            "Dharmavaram",
            "Kadiri",
            "Gorantla",
            "Chilamathur",
            "Bukkapatnam",
            "Kothacheruvu",
        ],
    ),
    (
        "Srikakulam",
        &[
            "Srikakulam",
            "Tekkali",
            "Palasa",
            "Ichchapuram",
            "Amadalavalasa",
            "Narasannapeta",
            "Pathapatnam",
            "Etcherla",
            "Gara",
            "Polaki",
        ],
    ),
    (
        "Tirupati",
        &[
            "Tirupati",
            "Srikalahasti",
            "Gudur",
            "Sullurpeta",
            "Venkatagiri",
            "Chandragiri",
            "Naidupeta",
            "Pellakuru",
            "Renigunta",
            "Yerpedu",
        ],
    ),
    (
        "Visakhapatnam",
        &[
            "Visakhapatnam",
            "Bheemunipatnam",
            "Gajuwaka",
            "Pendurthi",
            "Anandapuram",
            "Padmanabham",
            "Maharanipeta",
            "Gopalapatnam",
            "Mulagada",
            "Seethammadhara",
        ],
    ),
    (
        "Vizianagaram",
        &[
            "Vizianagaram",
            "Bobbili",
            "Cheepurupalli",
            "Gajapathinagaram",
            "Srungavarapukota",
            "Nellimarla",
            "Pusapatirega",
            "Denkada",
            "Bhothili",
            "Ramabhadrapuram",
        ],
    ),
    (
        "West Godavari",
        &[
            "Bhimavaram",
            "Narasapuram",
            "Tanuku",
            "Tadepalligudem",
            "Palakollu",
            "Undi",
            "Achanta",
            "Akividu",
            "Attili",
            "Iragavaram",
        ],
    ),
    (
        "YSR Kadapa",
        &[
            "Kadapa",
            "Proddatur",
            "Jammalamadugu",
            "Pulivendula",
            "Mydukur",
            "Kamalapuram",
            "Badvel",
            "Vontimitta",
            "Vallur",
            "Chennur",
        ],
    ),
];

pub fn district_names() -> impl Iterator<Item = &'static str> {
    DISTRICTS.iter().map(|(district, _)| *district)
}

/// Towns of `district`, or `None` when the district is not in the catalogue.
pub fn towns_of(district: &str) -> Option<&'static [&'static str]> {
    DISTRICTS
        .iter()
        .find(|(name, _)| *name == district)
        .map(|(_, towns)| *towns)
}

pub fn is_known_town(district: &str, town: &str) -> bool {
    towns_of(district).is_some_and(|towns| towns.contains(&town))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_size() {
        assert_eq!(DISTRICTS.len(), 26);
        assert!(DISTRICTS.iter().all(|(_, towns)| towns.len() >= 10));
    }

    #[test]
    fn test_towns_of_known_district() {
        let towns = towns_of("NTR").unwrap();
        assert_eq!(towns[0], "Vijayawada");
    }

    #[test]
    fn test_unknown_district() {
        assert!(towns_of("Hyderabad").is_none());
        assert!(!is_known_town("Hyderabad", "Secunderabad"));
    }

    #[test]
    fn test_town_must_belong_to_district() {
        assert!(is_known_town("Guntur", "Tenali"));
        assert!(!is_known_town("Krishna", "Tenali"));
    }

    #[test]
    fn test_same_town_name_in_two_districts() {
        assert!(is_known_town("Anantapur", "Atmakur"));
        assert!(is_known_town("Nandyal", "Atmakur"));
    }
}
