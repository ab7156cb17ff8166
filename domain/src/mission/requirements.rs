//! Requirement extraction: free text → topic-weight vector.
//!
//! Each of the six [`RequirementCategory`] values owns a fixed keyword list.
//! Every keyword found in the brief adds a flat increment to its category,
//! then the whole vector is scaled by the priority multiplier.

use super::brief::MissionBrief;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Topic categories a mission can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementCategory {
    Marketing,
    Technical,
    Content,
    Analysis,
    Conversion,
    Productivity,
}

impl RequirementCategory {
    /// All categories, in vector order.
    pub const ALL: [RequirementCategory; 6] = [
        RequirementCategory::Marketing,
        RequirementCategory::Technical,
        RequirementCategory::Content,
        RequirementCategory::Analysis,
        RequirementCategory::Conversion,
        RequirementCategory::Productivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::Marketing => "marketing",
            RequirementCategory::Technical => "technical",
            RequirementCategory::Content => "content",
            RequirementCategory::Analysis => "analysis",
            RequirementCategory::Conversion => "conversion",
            RequirementCategory::Productivity => "productivity",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    /// Lower-case keywords that signal this category in a brief.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RequirementCategory::Marketing => &[
                "marketing",
                "stratégie",
                "campagne",
                "marque",
                "acquisition",
                "publicité",
                "positionnement",
            ],
            RequirementCategory::Technical => &[
                "développement",
                "technique",
                "api",
                "application",
                "site",
                "intégration",
                "automatisation",
            ],
            RequirementCategory::Content => &[
                "contenu",
                "rédaction",
                "article",
                "blog",
                "newsletter",
                "seo",
                "copywriting",
            ],
            RequirementCategory::Analysis => &[
                "analyse",
                "données",
                "reporting",
                "kpi",
                "audit",
                "étude",
                "marché",
            ],
            RequirementCategory::Conversion => &[
                "conversion",
                "vente",
                "tunnel",
                "landing",
                "optimisation",
                "leads",
                "checkout",
            ],
            RequirementCategory::Productivity => &[
                "productivité",
                "organisation",
                "planification",
                "process",
                "automatiser",
                "délai",
                "équipe",
            ],
        }
    }

    /// Category an agent specialty tag contributes to.
    ///
    /// Unmapped tags count as [`RequirementCategory::Analysis`].
    pub fn for_specialty(tag: &str) -> Self {
        match tag {
            "marketing" | "stratégie" => RequirementCategory::Marketing,
            "développement" | "technique" | "automatisation" => RequirementCategory::Technical,
            "contenu" | "rédaction" | "seo" => RequirementCategory::Content,
            "analyse" | "données" | "reporting" => RequirementCategory::Analysis,
            "conversion" | "vente" | "optimisation" => RequirementCategory::Conversion,
            "productivité" | "organisation" | "planification" => {
                RequirementCategory::Productivity
            }
            _ => RequirementCategory::Analysis,
        }
    }
}

impl std::fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How keywords are located in the brief text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatching {
    /// Raw substring search: "site" also fires inside "visite".
    #[default]
    Substring,
    /// Keyword must be bounded by non-alphanumeric characters or text edges.
    WholeWord,
}

impl KeywordMatching {
    pub fn matches(&self, text: &str, keyword: &str) -> bool {
        match self {
            KeywordMatching::Substring => text.contains(keyword),
            KeywordMatching::WholeWord => contains_whole_word(text, keyword),
        }
    }
}

fn contains_whole_word(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.match_indices(keyword).any(|(start, _)| {
        let end = start + keyword.len();
        let before_ok = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

/// Non-negative weight per [`RequirementCategory`].
///
/// Serializes as a `category -> weight` map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<RequirementCategory, f64>",
    from = "BTreeMap<RequirementCategory, f64>"
)]
pub struct RequirementVector {
    weights: [f64; 6],
}

impl RequirementVector {
    /// Scan the brief and build the weighted vector.
    ///
    /// `increment` is added once per matching keyword; negative increments
    /// are treated as zero so weights stay non-negative.
    pub fn extract(brief: &MissionBrief, matching: KeywordMatching, increment: f64) -> Self {
        let text = brief.searchable_text();
        let increment = increment.max(0.0);
        let multiplier = brief.priority.multiplier();

        let mut weights = [0.0; 6];
        for category in RequirementCategory::ALL {
            let hits = category
                .keywords()
                .iter()
                .filter(|keyword| matching.matches(&text, keyword))
                .count();
            weights[category.index()] = hits as f64 * increment * multiplier;
        }

        Self { weights }
    }

    pub fn weight(&self, category: RequirementCategory) -> f64 {
        self.weights[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequirementCategory, f64)> + '_ {
        RequirementCategory::ALL
            .into_iter()
            .map(|c| (c, self.weight(c)))
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|w| *w == 0.0)
    }

    /// Category with the largest weight, if any weight is positive.
    pub fn dominant(&self) -> Option<RequirementCategory> {
        self.iter()
            .filter(|(_, w)| *w > 0.0)
            .fold(None, |best: Option<(RequirementCategory, f64)>, (c, w)| match best {
                Some((_, bw)) if bw >= w => best,
                _ => Some((c, w)),
            })
            .map(|(c, _)| c)
    }
}

impl From<RequirementVector> for BTreeMap<RequirementCategory, f64> {
    fn from(vector: RequirementVector) -> Self {
        vector.iter().collect()
    }
}

impl From<BTreeMap<RequirementCategory, f64>> for RequirementVector {
    fn from(map: BTreeMap<RequirementCategory, f64>) -> Self {
        let mut weights = [0.0; 6];
        for (category, weight) in map {
            weights[category.index()] = weight.max(0.0);
        }
        Self { weights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::priority::Priority;

    fn extract(brief: &MissionBrief) -> RequirementVector {
        RequirementVector::extract(brief, KeywordMatching::Substring, 3.0)
    }

    #[test]
    fn test_marketing_brief_weights() {
        let brief = MissionBrief::new("Créer une stratégie marketing pour une startup tech")
            .with_context("Startup B2B, budget limité")
            .with_priority(Priority::High);
        let v = extract(&brief);

        // "marketing" and "stratégie" both hit, scaled by 1.3
        assert!((v.weight(RequirementCategory::Marketing) - 7.8).abs() < 1e-9);
        assert_eq!(v.weight(RequirementCategory::Content), 0.0);
        assert_eq!(v.dominant(), Some(RequirementCategory::Marketing));
    }

    #[test]
    fn test_empty_brief_is_zero() {
        let v = extract(&MissionBrief::new(""));
        assert!(v.is_zero());
        assert_eq!(v.dominant(), None);
    }

    #[test]
    fn test_each_keyword_counts_once() {
        let brief = MissionBrief::new("blog blog blog");
        let v = extract(&brief);
        assert_eq!(v.weight(RequirementCategory::Content), 3.0);
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "site" inside "visite"
        let brief = MissionBrief::new("organiser une visite");
        let loose = extract(&brief);
        let strict = RequirementVector::extract(&brief, KeywordMatching::WholeWord, 3.0);
        assert_eq!(loose.weight(RequirementCategory::Technical), 3.0);
        assert_eq!(strict.weight(RequirementCategory::Technical), 0.0);
    }

    #[test]
    fn test_whole_word_accepts_punctuation_boundaries() {
        assert!(KeywordMatching::WholeWord.matches("audit, seo.", "seo"));
        assert!(KeywordMatching::WholeWord.matches("seo", "seo"));
        assert!(!KeywordMatching::WholeWord.matches("seoul", "seo"));
        assert!(KeywordMatching::WholeWord.matches("seoul puis seo", "seo"));
    }

    #[test]
    fn test_negative_increment_is_clamped() {
        let v = RequirementVector::extract(
            &MissionBrief::new("marketing"),
            KeywordMatching::Substring,
            -3.0,
        );
        assert!(v.iter().all(|(_, w)| w >= 0.0));
    }

    #[test]
    fn test_serializes_as_category_map() {
        let v = extract(&MissionBrief::new("newsletter"));
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["content"], 3.0);
        assert_eq!(json["marketing"], 0.0);

        let back: RequirementVector = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_specialty_mapping_defaults_to_analysis() {
        assert_eq!(
            RequirementCategory::for_specialty("stratégie"),
            RequirementCategory::Marketing
        );
        assert_eq!(
            RequirementCategory::for_specialty("vente"),
            RequirementCategory::Conversion
        );
        assert_eq!(
            RequirementCategory::for_specialty("jardinage"),
            RequirementCategory::Analysis
        );
    }
}
