//! English (US) dataset.

use crate::LocaleData;

pub const EN: LocaleData = LocaleData {
    code: "en",
    first_names: &[
        "Alice", "Arthur", "Beatrice", "Benjamin", "Charlotte", "Daniel", "Eleanor", "Ethan",
        "Fiona", "George", "Hannah", "Henry", "Isabella", "Jack", "Katherine", "Liam", "Margaret",
        "Nathan", "Olivia", "Oscar", "Penelope", "Quentin", "Rebecca", "Samuel", "Sophie",
        "Theodore", "Ursula", "Victor", "Wendy", "William", "Yvonne", "Zachary",
    ],
    last_names: &[
        "Anderson", "Baker", "Brooks", "Campbell", "Carter", "Collins", "Cooper", "Davis",
        "Edwards", "Evans", "Fisher", "Foster", "Graham", "Harris", "Hughes", "Jenkins",
        "Johnson", "Kelly", "Lawrence", "Mitchell", "Morgan", "Murphy", "O'Brien", "Parker",
        "Reynolds", "Richardson", "Simmons", "Stewart", "Turner", "Walker", "Watson", "Wright",
    ],
    domains: &[
        "example.com",
        "example.net",
        "example.org",
        "mail.example.com",
        "inbox.example.net",
    ],
    street_names: &[
        "Maple Street",
        "Oak Avenue",
        "Cedar Lane",
        "Elm Drive",
        "Willow Court",
        "Birch Road",
        "Chestnut Boulevard",
        "Juniper Way",
        "Magnolia Terrace",
        "Sycamore Place",
        "Hawthorn Crescent",
        "Poplar Row",
    ],
    cities: &[
        "Springfield",
        "Riverton",
        "Fairview",
        "Georgetown",
        "Salem",
        "Clinton",
        "Madison",
        "Arlington",
        "Ashland",
        "Burlington",
        "Clayton",
        "Dayton",
        "Franklin",
        "Greenville",
        "Kingston",
        "Oxford",
    ],
};
