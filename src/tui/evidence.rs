//! Evidence references shown next to form fields and on the result screen.
//!
//! Descriptive only; the engine never reads this table.

/// One supporting study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evidence {
    pub topic: &'static str,
    pub study: &'static str,
    pub link: &'static str,
    pub effect: &'static str,
}

pub static EVIDENCE: [Evidence; 4] = [
    Evidence {
        topic: "smoking",
        study: "Hackshaw et al. BMJ 2018",
        link: "https://www.bmj.com/content/360/bmj.j5855",
        effect: "2-4x higher risk of recurrent events",
    },
    Evidence {
        topic: "ldl",
        study: "CTT Collaboration, Lancet 2010",
        link: "https://www.thelancet.com/journals/lancet/article/PIIS0140-6736(10)61350-5/",
        effect: "22% RR reduction per 1 mmol/L LDL reduction",
    },
    Evidence {
        topic: "statin_high",
        study: "TNT Trial, NEJM 2005",
        link: "https://www.nejm.org/doi/full/10.1056/nejmoa050461",
        effect: "22% RR reduction vs moderate-intensity",
    },
    Evidence {
        topic: "sbp",
        study: "SPRINT Trial, NEJM 2015",
        link: "https://www.nejm.org/doi/full/10.1056/NEJMoa1511939",
        effect: "25% RR reduction with intensive control",
    },
];

/// Citation of the risk model itself.
pub const MODEL_CITATION: &str = "Dorresteijn JAN et al. Eur Heart J 2019;40(37):3133-3140";

#[must_use]
pub fn lookup(topic: &str) -> Option<&'static Evidence> {
    EVIDENCE.iter().find(|e| e.topic == topic)
}

/// Short hint for a form field, or an empty string for unknown topics.
#[must_use]
pub fn tooltip(topic: &str) -> String {
    lookup(topic)
        .map(|e| format!("{} ({})", e.effect, e.study))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(
            lookup("sbp").map(|e| e.study),
            Some("SPRINT Trial, NEJM 2015")
        );
        assert!(lookup("hdl").is_none());
    }

    #[test]
    fn test_tooltip() {
        assert!(tooltip("smoking").contains("2-4x higher risk"));
        assert!(tooltip("unknown").is_empty());
    }
}
