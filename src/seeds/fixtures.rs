//! Literal pools the sample-data seeders draw from.

pub const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "Lucas", "Isabella", "Mateo",
    "Mia", "Levi", "Amelia", "Ethan", "Harper", "James", "Evelyn", "Benjamin", "Camila", "Henry",
    "Aria", "Daniel", "Luna", "Samuel", "Chloe", "Owen", "Nora", "Jack", "Zoe", "Leo",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson",
];

/// `(city, region, postal code prefix)`
pub const CITIES: &[(&str, &str, &str)] = &[
    ("Austin", "TX", "787"),
    ("Denver", "CO", "802"),
    ("Portland", "OR", "972"),
    ("Seattle", "WA", "981"),
    ("Chicago", "IL", "606"),
    ("Boston", "MA", "021"),
    ("Atlanta", "GA", "303"),
    ("Phoenix", "AZ", "850"),
    ("Nashville", "TN", "372"),
    ("Minneapolis", "MN", "554"),
    ("Raleigh", "NC", "276"),
    ("San Diego", "CA", "921"),
    ("Columbus", "OH", "432"),
    ("Madison", "WI", "537"),
    ("Salt Lake City", "UT", "841"),
];

pub const STREETS: &[&str] = &[
    "Maple Avenue",
    "Oak Street",
    "Pine Road",
    "Cedar Lane",
    "Elm Street",
    "Washington Boulevard",
    "Lakeview Drive",
    "Sunset Boulevard",
    "Highland Avenue",
    "Park Place",
    "River Road",
    "Hillcrest Drive",
    "Main Street",
    "Church Street",
    "Meadow Lane",
];

pub const UNIT_PREFIXES: &[&str] = &["Apt", "Suite", "Unit", "Floor"];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org", "mail.test"];

/// `(name, slug, description, typical price range in whole units)`
pub const CATEGORIES: &[(&str, &str, &str, (i64, i64))] = &[
    ("Electronics", "electronics", "Phones, audio, computing and accessories", (25, 1200)),
    ("Home & Kitchen", "home-kitchen", "Cookware, appliances and home goods", (10, 450)),
    ("Clothing", "clothing", "Apparel and footwear for every season", (8, 180)),
    ("Books", "books", "Fiction, non-fiction and reference titles", (5, 60)),
    ("Sports & Outdoors", "sports-outdoors", "Fitness, camping and outdoor gear", (12, 600)),
    (
        "Beauty & Personal Care",
        "beauty-personal-care",
        "Skin care, hair care and grooming",
        (4, 120),
    ),
    ("Toys & Games", "toys-games", "Toys, puzzles and board games", (6, 150)),
    ("Grocery", "grocery", "Pantry staples, snacks and beverages", (2, 45)),
];

/// Category slugs weighted by how much of the catalog they make up
pub const CATEGORY_WEIGHTS: &[(&str, u32)] = &[
    ("electronics", 22),
    ("home-kitchen", 18),
    ("clothing", 16),
    ("books", 10),
    ("sports-outdoors", 10),
    ("beauty-personal-care", 9),
    ("toys-games", 8),
    ("grocery", 7),
];

/// Product nouns per category slug
pub const PRODUCT_NOUNS: &[(&str, &[&str])] = &[
    (
        "electronics",
        &[
            "Wireless Earbuds",
            "Smartwatch",
            "Bluetooth Speaker",
            "USB-C Hub",
            "Laptop Stand",
            "Mechanical Keyboard",
        ],
    ),
    (
        "home-kitchen",
        &[
            "Chef's Knife",
            "Cast Iron Skillet",
            "Coffee Grinder",
            "Blender",
            "Storage Set",
            "Kettle",
        ],
    ),
    (
        "clothing",
        &[
            "Denim Jacket",
            "Running Shoes",
            "Wool Sweater",
            "Rain Coat",
            "Chino Pants",
            "Linen Shirt",
        ],
    ),
    (
        "books",
        &[
            "Cookbook",
            "Field Guide",
            "Mystery Novel",
            "Travel Journal",
            "Atlas",
            "Poetry Collection",
        ],
    ),
    (
        "sports-outdoors",
        &[
            "Yoga Mat",
            "Camping Tent",
            "Trail Backpack",
            "Water Bottle",
            "Resistance Bands",
            "Headlamp",
        ],
    ),
    (
        "beauty-personal-care",
        &["Face Serum", "Hair Dryer", "Beard Oil", "Sunscreen", "Body Lotion", "Lip Balm Set"],
    ),
    (
        "toys-games",
        &["Puzzle", "Board Game", "Building Blocks", "Plush Bear", "Card Game", "Kite"],
    ),
    (
        "grocery",
        &["Olive Oil", "Dark Roast Coffee", "Green Tea", "Granola", "Pasta Sampler", "Hot Sauce"],
    ),
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Classic", "Premium", "Compact", "Deluxe", "Eco", "Pro", "Essential", "Ultra", "Everyday",
    "Signature",
];

pub const PRODUCT_STATUS_WEIGHTS: &[(&str, u32)] =
    &[("active", 80), ("draft", 12), ("discontinued", 8)];

/// `(name, slug, country)`
pub const BRANDS: &[(&str, &str, &str)] = &[
    ("Northwind", "northwind", "United States"),
    ("Aurora Home", "aurora-home", "Sweden"),
    ("Kaito", "kaito", "Japan"),
    ("Verdant", "verdant", "Canada"),
    ("Bellweather", "bellweather", "United Kingdom"),
    ("Solstice", "solstice", "Spain"),
    ("Ironpeak", "ironpeak", "Germany"),
    ("Lumen & Co", "lumen-co", "France"),
    ("Pacifica", "pacifica", "Australia"),
    ("Tidewater", "tidewater", "United States"),
];

pub const CUSTOMER_TYPE_WEIGHTS: &[(&str, u32)] = &[
    ("individual", 70),
    ("business", 15),
    ("wholesale", 5),
    ("vip", 10),
];

pub const CUSTOMER_STATUS_WEIGHTS: &[(&str, u32)] =
    &[("active", 85), ("inactive", 10), ("suspended", 5)];

/// `(code, name, contact email, phone, country, rating)`
pub const PROVIDERS: &[(&str, &str, &str, &str, &str, f64)] = &[
    (
        "PRV-NWS",
        "Northwind Supply",
        "sales@northwind-supply.test",
        "+1-512-555-0101",
        "United States",
        4.6,
    ),
    (
        "PRV-GLT",
        "Global Trade Partners",
        "accounts@globaltrade.test",
        "+44-20-5550-0102",
        "United Kingdom",
        4.2,
    ),
    (
        "PRV-PAC",
        "Pacific Rim Imports",
        "orders@pacificrim.test",
        "+61-2-5550-0103",
        "Australia",
        3.9,
    ),
    (
        "PRV-EUR",
        "EuroSource Distribution",
        "hello@eurosource.test",
        "+49-30-5550-0104",
        "Germany",
        4.4,
    ),
    ("PRV-MPL", "Maple Leaf Wholesale", "buy@mapleleaf.test", "+1-416-555-0105", "Canada", 4.1),
    (
        "PRV-SUN",
        "Sunrise Manufacturing",
        "contact@sunrise-mfg.test",
        "+81-3-5550-0106",
        "Japan",
        4.8,
    ),
    ("PRV-AND", "Andes Organics", "trade@andes-organics.test", "+56-2-5550-0107", "Chile", 3.7),
    ("PRV-MED", "Mediterranean Goods", "info@medgoods.test", "+34-91-555-0108", "Spain", 4.0),
    (
        "PRV-ATL",
        "Atlas Logistics & Supply",
        "desk@atlas-supply.test",
        "+1-404-555-0109",
        "United States",
        3.5,
    ),
    ("PRV-NOR", "Nordic Craft Co", "sales@nordiccraft.test", "+46-8-5550-0110", "Sweden", 4.5),
    ("PRV-IND", "Indus Textiles", "export@industextiles.test", "+91-22-5550-0111", "India", 3.8),
    ("PRV-LUX", "Lumiere Beauty Labs", "partners@lumiere.test", "+33-1-5550-0112", "France", 4.3),
];

pub const PAYMENT_TERMS_WEIGHTS: &[(&str, u32)] = &[
    ("net-30", 50),
    ("net-60", 25),
    ("net-15", 15),
    ("prepaid", 10),
];

/// `(department, positions)`
pub const DEPARTMENTS: &[(&str, &[&str])] = &[
    ("Customer Service", &["Support Agent", "Support Team Lead", "Returns Specialist"]),
    ("Fulfillment", &["Warehouse Associate", "Shipping Coordinator", "Inventory Analyst"]),
    ("Marketing", &["Content Strategist", "SEO Specialist", "Campaign Manager"]),
    ("Engineering", &["Software Engineer", "Site Reliability Engineer", "QA Engineer"]),
    ("Finance", &["Accountant", "Payroll Specialist", "Financial Analyst"]),
    ("Human Resources", &["HR Generalist", "Recruiter", "Benefits Coordinator"]),
    ("Merchandising", &["Category Buyer", "Merchandise Planner", "Pricing Analyst"]),
];

pub const DEPARTMENT_WEIGHTS: &[(&str, u32)] = &[
    ("Customer Service", 22),
    ("Fulfillment", 25),
    ("Marketing", 10),
    ("Engineering", 15),
    ("Finance", 8),
    ("Human Resources", 6),
    ("Merchandising", 14),
];

pub const EMPLOYMENT_TYPE_WEIGHTS: &[(&str, u32)] = &[
    ("full-time", 70),
    ("part-time", 18),
    ("contractor", 8),
    ("intern", 4),
];

pub const EMPLOYEE_STATUS_WEIGHTS: &[(&str, u32)] =
    &[("active", 88), ("on-leave", 5), ("terminated", 7)];

pub const NOTE_TYPE_WEIGHTS: &[(&str, u32)] = &[
    ("performance", 30),
    ("general", 25),
    ("training", 20),
    ("recognition", 20),
    ("disciplinary", 5),
];

/// Note bodies per note type; `{name}` is replaced by the employee's first name
pub const NOTE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "performance",
        &[
            "{name} met all quarterly targets and improved turnaround time.",
            "Quarterly review: {name} is meeting expectations; goals set for next quarter.",
            "{name} needs support prioritising tasks during peak season.",
        ],
    ),
    (
        "general",
        &[
            "{name} updated emergency contact details.",
            "Schedule change requested by {name} for the next rota.",
            "{name} moved to the new desk area on the second floor.",
        ],
    ),
    (
        "training",
        &[
            "{name} completed the warehouse safety refresher.",
            "{name} enrolled in the customer empathy workshop.",
            "{name} finished onboarding for the new order management tools.",
        ],
    ),
    (
        "recognition",
        &[
            "{name} received customer praise for resolving a complex return.",
            "Peer nomination: {name} went above and beyond during the holiday rush.",
        ],
    ),
    (
        "disciplinary",
        &[
            "Verbal warning issued to {name} for repeated late arrivals.",
            "{name} reminded of the data handling policy after an incident.",
        ],
    ),
];

pub const ORDER_STATUS_WEIGHTS: &[(&str, u32)] = &[
    ("delivered", 45),
    ("shipped", 15),
    ("processing", 12),
    ("pending", 10),
    ("cancelled", 10),
    ("refunded", 8),
];

pub const PAYMENT_METHOD_WEIGHTS: &[(&str, u32)] = &[
    ("credit_card", 55),
    ("paypal", 20),
    ("debit_card", 15),
    ("gift_card", 5),
    ("bank_transfer", 5),
];

/// `(name, email, roles)`; the first entry is the platform owner
pub const USERS: &[(&str, &str, &[&str])] = &[
    ("Store Owner", "owner@storefront.test", &["super-admin"]),
    ("Operations Admin", "admin@storefront.test", &["admin"]),
    ("Grace Kim", "grace.kim@storefront.test", &["staff"]),
    ("Marcus Bell", "marcus.bell@storefront.test", &["staff"]),
    ("Priya Nair", "priya.nair@storefront.test", &["staff"]),
    ("Tom Alvarez", "tom.alvarez@storefront.test", &["staff"]),
];
