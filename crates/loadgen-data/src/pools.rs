//! Default fragment pools for shop data synthesis.

/// First-name fragments (20 entries).
pub const FIRST_NAMES: &[&str] = &[
    "Liam", "Olivia", "Noah", "Emma", "Oliver", "Ava", "William", "Sophia",
    "Elijah", "Isabella", "James", "Charlotte", "Benjamin", "Amelia", "Lucas",
    "Mia", "Mason", "Harper", "Ethan", "Evelyn",
];

/// Last-name fragments (20 entries).
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
    "Davis", "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez",
    "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
];

/// Adjective fragments for item names (20 entries).
pub const DESCRIPTORS: &[&str] = &[
    "Adaptable", "Ambitious", "Brave", "Calm", "Cheerful", "Classic",
    "Cultured", "Delightful", "Delicate", "Familiar", "Fearless", "Gentle",
    "Harmonious", "Joyous", "Lovely", "Lucky", "Noble", "Original",
    "Timeless", "Wise",
];

/// Product-noun fragments for item names (15 entries).
pub const PRODUCTS: &[&str] = &[
    "Fedora", "Boater", "Snapback", "Trilby", "Panama", "Bowler", "Dad",
    "Newsboy", "Flat Cap", "Beanie", "Bucket", "Baseball", "Trapper",
    "Pork Pie", "Top Hat",
];

/// Materialize a static pool as owned strings.
pub fn to_owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}
