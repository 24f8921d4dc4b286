use super::SeedEntry;

/// Banks listed before any registration: Visakhapatnam, Vijayawada and the
/// district Red Cross centres.
pub(super) const SEED_BANKS: &[SeedEntry] = &[
    SeedEntry {
        id: "v1",
        name: "A.S. Raja Voluntary Blood Bank",
        location: "Visakhapatnam",
        address: "Beside Care Hospital, Opp. Circuit House, Waltair Main Road, Visakhapatnam-3",
        contact: "0891-2543436, 5563436",
        category: "Voluntary",
    },
    SeedEntry {
        id: "v2",
        name: "Apollo Hospital Blood Bank",
        location: "Visakhapatnam",
        address: "Apollo hospital, Waltair Main Road, Visakhapatnam-2",
        contact: "0891-2727272",
        category: "Hospital",
    },
    SeedEntry {
        id: "v3",
        name: "Indian Red Cross Society Blood Bank",
        location: "Visakhapatnam",
        address: "14-35-4, Red Cross Building, Opp Zilla Parishad, Maharanipeta, Visakhapatnam-2",
        contact: "0891-2703953, 2706025",
        category: "Red Cross",
    },
    SeedEntry {
        id: "v4",
        name: "King George Hospital Blood Bank",
        location: "Visakhapatnam",
        address: "KGH, Maharanipeta, Visakhapatnam-2",
        contact: "0891-2564891",
        category: "Hospital",
    },
    SeedEntry {
        id: "v5",
        name: "Rajya Laxmi Voluntary Blood Bank",
        location: "Visakhapatnam",
        address: "14-37-44, Chaitanya Medical Centre Complex, Collectrate Jn. Visakhapatnam-2",
        contact: "0891-2568618",
        category: "Voluntary",
    },
    SeedEntry {
        id: "v6",
        name: "R.C. Bothra Voluntary Blood Bank",
        location: "Visakhapatnam",
        address: "43-6-33, Rama Talkies Road, Srinagar, Visakhapatnam",
        contact: "0891-5515336, 094400-33858",
        category: "Voluntary",
    },
    SeedEntry {
        id: "v7",
        name: "Rotary Blood Bank",
        location: "Visakhapatnam",
        address: "Sri Hari Plaza, Beside Prahalada Kalyana Mandapam, Maharanipeta, Visakhapatnam-2",
        contact: "0891-5534635",
        category: "Charity",
    },
    SeedEntry {
        id: "v8",
        name: "Seven Hills Hospital Blood Bank",
        location: "Visakhapatnam",
        address: "Seven Hills Hospital, Waltair Main Road, Visakhapatnam-2",
        contact: "0891-2708090",
        category: "Hospital",
    },
    SeedEntry {
        id: "v9",
        name: "Sitarama Blood Bank",
        location: "Visakhapatnam",
        address: "Opp. KGH OP Gate, Maharanipeta, Visakhapatnam-2",
        contact: "0891-2706025, 2784321",
        category: "Private",
    },
    SeedEntry {
        id: "v10",
        name: "Visakha Voluntary Blood Bank",
        location: "Visakhapatnam",
        address: "Above Visakha Medical Centre, Gajuwaka Jn. Gajuwaka",
        contact: "Not Available",
        category: "Voluntary",
    },
    SeedEntry {
        id: "via1",
        name: "New City Blood Bank",
        location: "Vijayawada",
        address: "Dornakal Road, Suryaraopet, Vijayawada",
        contact: "9615444447",
        category: "Private",
    },
    SeedEntry {
        id: "via2",
        name: "Vijaya Sri Blood Bank",
        location: "Vijayawada",
        address: "Dornakal Road, Suryaraopet, Vijayawada",
        contact: "08662433199",
        category: "Private",
    },
    SeedEntry {
        id: "via3",
        name: "Rotary Red Cross Blood Bank",
        location: "Vijayawada",
        address: "Door No 26-5-5, G S Raju Street, Gandhi Nagar, Vijayawada - 520003",
        contact: "08662570082",
        category: "Red Cross",
    },
    SeedEntry {
        id: "via4",
        name: "Lions Blood Bank",
        location: "Vijayawada",
        address: "29-4-54k, CSI CDA Complex, Prakasham Road, Suryaraopet, Vijayawada",
        contact: "08662573636",
        category: "Charity",
    },
    SeedEntry {
        id: "via5",
        name: "Chaitanya Blood Bank",
        location: "Vijayawada",
        address: "40-9/1-26, 1st Floor, Vasavi Complex, Benz Circle, Vijayawada",
        contact: "08662497977",
        category: "Private",
    },
    SeedEntry {
        id: "via6",
        name: "Aayush Blood Bank",
        location: "Vijayawada",
        address: "Door No 48-13-3 & 3a, Ring Road, Vijayawada",
        contact: "08662541414",
        category: "Private",
    },
    SeedEntry {
        id: "via7",
        name: "Andhra Blood Bank",
        location: "Vijayawada",
        address: "Cvr Complex, Prakasam Road, Governorpet, Vijayawada",
        contact: "08662574757",
        category: "Private",
    },
    SeedEntry {
        id: "ap1",
        name: "Red Cross Blood Bank Ananthpur",
        location: "Ananthpur",
        address: "Ananthpur District",
        contact: "08554-246344, 9666629797, ircsbloodbank.anantapur@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap2",
        name: "Red Cross Blood Bank Bhimavaram",
        location: "Bhimavaram",
        address: "Bhimavaram",
        contact: "9666771911, ircsbvrmbloodcentre@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap3",
        name: "Red Cross Blood Bank Chittoor",
        location: "Chittoor",
        address: "Chittoor",
        contact: "8374908091, ircschittoor@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap4",
        name: "Red Cross Blood Bank Eluru",
        location: "Eluru",
        address: "Eluru",
        contact: "9440189333, redcrosseluru@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap5",
        name: "Red Cross Blood Bank Guntur",
        location: "Guntur",
        address: "Guntur",
        contact: "9505540341, redcrossguntur@yahoo.co.in",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap6",
        name: "Red Cross Blood Bank Kadapa",
        location: "Kadapa",
        address: "Kadapa",
        contact: "9347162489, ircskadapa@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap7",
        name: "Red Cross Blood Bank Kakinada",
        location: "Kakinada",
        address: "Kakinada",
        contact: "9848424389, redcrossbloodbank@yahoo.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap8",
        name: "Red Cross Blood Bank Kavali",
        location: "Kavali",
        address: "Kavali",
        contact: "8977535722, kavaliredcross@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap9",
        name: "Red Cross Blood Bank Machilipatum",
        location: "Machilipatum",
        address: "Krishna - Machilipatum",
        contact: "7793939660, drprcbloodbankmtm@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap10",
        name: "Red Cross Blood Bank Kurnool",
        location: "Kurnool",
        address: "Kurnool",
        contact: "08518-255347, ircsbloodbankknl@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap11",
        name: "Red Cross Blood Bank Narasapuram",
        location: "Narasapuram",
        address: "Narasapuram",
        contact: "9291631555, recrossnarsapuram@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap12",
        name: "Red Cross Blood Bank Nellore",
        location: "Nellore",
        address: "Nellore",
        contact: "9347033100, redcrossbloodbanknellore@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap13",
        name: "Red Cross Blood Bank Ongole",
        location: "Ongole",
        address: "Ongole",
        contact: "9515153436, ircsongole@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap14",
        name: "Red Cross Blood Bank Palanadu",
        location: "Palanadu",
        address: "Palanadu",
        contact: "9440758731, redcrosspalnadu@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap15",
        name: "Red Cross Blood Bank Repalle",
        location: "Repalle",
        address: "Repalle",
        contact: "9177883353, rplredcrossbb@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap16",
        name: "Red Cross Blood Bank Srikakulam",
        location: "Srikakulam",
        address: "Srikakulam",
        contact: "9133008585, secretary.redcrosssklm@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap17",
        name: "Red Cross Blood Bank Tanuku",
        location: "Tanuku",
        address: "Tanuku",
        contact: "8309268213, bcircs733@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap18",
        name: "Red Cross Blood Bank Vijayawada",
        location: "Vijayawada",
        address: "Vijayawada",
        contact: "8977008540, ircskrishna@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap19",
        name: "Red Cross Blood Bank Visakhapatnam",
        location: "Visakhapatnam",
        address: "Visakhapatnam",
        contact: "8331018934, secretaryvspredcross@gmail.com",
        category: "Red Cross",
    },
    SeedEntry {
        id: "ap20",
        name: "Red Cross Blood Bank Vizianagaram",
        location: "Vizianagaram",
        address: "Vizianagaram",
        contact: "7032076969, ircsofficevzm@gmail.com",
        category: "Red Cross",
    },
];
