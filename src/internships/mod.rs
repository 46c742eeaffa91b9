//! Static catalog of internship opportunities linked from the home page.

/// One internship listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Internship {
    pub key: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub location: Option<&'static str>,
    pub eligibility: Option<&'static str>,
    pub description: &'static str,
    pub url: &'static str,
}

pub static INTERNSHIPS: [Internship; 4] = [
    Internship {
        key: "cuny",
        title: "CUNY Career Launch Program Summer 2024",
        organization: "City University of New York",
        kind: "Career Development Program",
        duration: "Summer 2024",
        location: None,
        eligibility: Some("CUNY Students"),
        description: "Comprehensive career development program for CUNY students",
        url: "https://www.cuny.edu/about/administration/offices/ocip/students/careerlaunch/",
    },
    Internship {
        key: "metro",
        title: "MetroPlusHealth Summer Internship: Telecommunications",
        organization: "MetroPlusHealth",
        kind: "Technical Internship",
        duration: "Summer 2024",
        location: Some("New York"),
        eligibility: None,
        description: "Hands-on telecommunications experience in healthcare technology",
        url: "https://www.linkedin.com/jobs/view/3894464535/",
    },
    Internship {
        key: "microsoft",
        title: "Research Intern",
        organization: "Microsoft",
        kind: "Research Internship",
        duration: "Variable",
        location: None,
        eligibility: None,
        description: "Research opportunities in cutting-edge technology at Microsoft",
        url: "https://www.linkedin.com/jobs/view/3910635594/",
    },
    Internship {
        key: "refugee",
        title: "Refugee Resettlement Intern - Summer 2024",
        organization: "Various NGOs",
        kind: "Social Impact Internship",
        duration: "Summer 2024",
        location: None,
        eligibility: None,
        description: "Support refugees and asylum seekers in their resettlement journey",
        url: "https://www.google.com/search?q=asylum+seeker+internship",
    },
];

/// Look up an internship by key (case-insensitive)
pub fn find_internship(key: &str) -> anyhow::Result<&'static Internship> {
    let key = key.trim();
    INTERNSHIPS
        .iter()
        .find(|i| i.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| {
            let valid: Vec<&str> = INTERNSHIPS.iter().map(|i| i.key).collect();
            anyhow::anyhow!(
                "Unknown internship '{}'. Valid keys: {}",
                key,
                valid.join(", ")
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_find_internship_case_insensitive() {
        let internship = find_internship("Microsoft").unwrap();
        assert_eq!(internship.title, "Research Intern");
    }

    #[test]
    fn test_find_unknown_lists_valid_keys() {
        let err = find_internship("google").unwrap_err().to_string();
        assert!(err.contains("google"));
        assert!(err.contains("cuny, metro, microsoft, refugee"));
    }

    #[test]
    fn test_keys_unique_and_urls_https() {
        let keys: HashSet<&str> = INTERNSHIPS.iter().map(|i| i.key).collect();
        assert_eq!(keys.len(), INTERNSHIPS.len());
        assert!(INTERNSHIPS.iter().all(|i| i.url.starts_with("https://")));
    }
}
