//! Static branch and salesperson directory
//!
//! Salesperson choices depend on the chosen branch; the form only offers
//! values from this table, though the draft accepts any string structurally.

/// Branch name → salespeople registered at that branch
const BRANCH_SALES_MAPPING: &[(&str, &[&str])] = &[
    (
        "Mumbai",
        &[
            "Amit Korgaonkar",
            "Santosh Pachratkar",
            "Rakesh Jain",
            "Kamlesh Sutar",
            "Pradeep Jadhav",
        ],
    ),
    ("Ulasnagar", &["Shiv Ratan (Shivam)", "Viay Sutar"]),
    ("Kolkata", &["Rajesh Jain"]),
    ("Jaipur", &["Durgesh Bhati"]),
    (
        "Delhi",
        &[
            "Lalit Maroo",
            "Anish Jain",
            "Suresh Nautiyal",
            "Rahul Vashishtha",
            "Mohit Sharma",
        ],
    ),
    ("Ahmedabad", &["ravindra kaushik"]),
    ("Bangalore", &["Balasubramanyam", "Tarachand"]),
    ("Tirupur", &["Alexander Pushkin", "Subramanian", "Mani Maran"]),
    (
        "Surat",
        &["Anil Marthe", "Raghuveer Darbar", "Sailesh Pathak", "Vanraj Darbar"],
    ),
];

/// All branch names, in directory order
pub fn branches() -> Vec<&'static str> {
    BRANCH_SALES_MAPPING.iter().map(|(branch, _)| *branch).collect()
}

/// Salespeople for a branch; empty for an unknown branch
pub fn salespeople(branch: &str) -> &'static [&'static str] {
    BRANCH_SALES_MAPPING
        .iter()
        .find(|(name, _)| *name == branch)
        .map(|(_, people)| *people)
        .unwrap_or(&[])
}
