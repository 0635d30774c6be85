//! Canned answers served by the mock, keyed by service and first argument.
//!
//! Each entry is a list of rows; every row becomes one `dataVectors` item
//! whose fields become `dataRow` leaves.

pub(crate) type Entry = (&'static str, &'static str, &'static [&'static [&'static str]]);

pub(crate) const BUILTIN: &[Entry] = &[
    ("Frequencies", "Haus", &[&["122072", "7"]]),
    ("Frequencies", "Autos", &[&["40614", "9"]]),
    ("Frequencies", "Stuhl", &[&["2541", "11"]]),
    ("Baseform", "Autos", &[&["Auto", "N"]]),
    ("Baseform", "Auto", &[&["Auto", "N"]]),
    ("Baseform", "Stuhl", &[&["Stuhl", "N"]]),
    (
        "Sachgebiet",
        "Michael",
        &[&["Vorname"], &["Nachname"], &["Männername"]],
    ),
    (
        "Sachgebiet",
        "Buch",
        &[
            &["Sprachwissenschaft"],
            &["Nachname"],
            &["Stadt"],
            &["Buchkunde/Buchhandel"],
            &["Motive"],
        ],
    ),
    (
        "Wordforms",
        "Buch",
        &[
            &["Buch"],
            &["Bücher"],
            &["Büchern"],
            &["Buches"],
            &["Buchs"],
            &["Bucher"],
        ],
    ),
    ("Wordforms", "Auto", &[&["Auto"], &["Autos"]]),
    (
        "Thesaurus",
        "Buch",
        &[
            &["Buch"],
            &["Titel"],
            &["Werk"],
            &["Zeitung"],
            &["Band"],
            &["Literatur"],
            &["Zeitschrift"],
            &["Bruch"],
            &["Lektüre"],
            &["Schrift"],
            &["Roman"],
        ],
    ),
    (
        "Synonyms",
        "Brot",
        &[
            &["Laib", "v"],
            &["Brotlaib", "v"],
            &["Laib", "v"],
            &["Schnitte", "v"],
            &["Stulle", "v"],
        ],
    ),
    (
        "Synonyms",
        "Auto",
        &[
            &["Kraftwagen", "v"],
            &["Automobil", "v"],
            &["Benzinkutsche", "v"],
        ],
    ),
    (
        "Sentences",
        "Klasse",
        &[
            &[
                "40829928",
                "Bei den Grünen war ich wohl im Urteil der politisch korrekten Klasse bei den Richtigen, auch wenn ich in ihren Augen das Falsche sagte.",
            ],
            &["40829929", "Die Klasse fährt im Mai auf Klassenfahrt."],
        ],
    ),
    (
        "LeftNeighbours",
        "Stuhl",
        &[
            &["elektrischen", "Stuhl", "626"],
            &["seinem", "Stuhl", "592"],
            &["den", "Stuhl", "410"],
        ],
    ),
    (
        "RightNeighbours",
        "Stuhl",
        &[
            &["Stuhl", "räumen", "189"],
            &["Stuhl", "hin und her", "130"],
            &["Stuhl", "sitzen", "98"],
        ],
    ),
    (
        "Similarity",
        "Stuhl",
        &[
            &["Stuhl", "Sessel", "26"],
            &["Stuhl", "Lehnstuhl", "24"],
            &["Stuhl", "Sofa", "21"],
            &["Stuhl", "Hocker", "19"],
        ],
    ),
    (
        "ExperimentalSynonyms",
        "Stuhl",
        &[
            &["Einrichtungsgegenstand", "v"],
            &["Bett", "v"],
            &["Lampe", "v"],
            &["Tisch", "v"],
            &["Schrank", "v"],
            &["Teppich", "v"],
            &["Gebrauchsmöbel", "v"],
            &["Möbelstück", "v"],
            &["Bank", "v"],
            &["Bord", "v"],
        ],
    ),
    (
        "RightCollocationFinder",
        "Stuhl",
        &[
            &["Stuhl", "aufmöbeln", "V"],
            &["Stuhl", "aufreihen", "V"],
            &["Stuhl", "aufspringen", "V"],
            &["Stuhl", "bequem", "A"],
        ],
    ),
    (
        "LeftCollocationFinder",
        "Stuhl",
        &[
            &["Hl", "A", "Stuhl"],
            &["abwaschbar", "A", "Stuhl"],
            &["alle", "A", "Stuhl"],
            &["sitzen", "V", "Stuhl"],
        ],
    ),
    ("Cooccurrences", "Haus", &[&["Haus", "das", "11747"]]),
    (
        "NGrams",
        "Auto %",
        &[&["Auto fahren", "120"], &["Auto kaufen", "85"]],
    ),
    ("NGramReferences", "Auto %", &[&["Auto fahren", "40808144"]]),
    ("Kreuzwortraetsel", "%uto", &[&["Auto"]]),
];
