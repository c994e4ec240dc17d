//! Keyword heuristic behind the "AI analysis" of a report form.
//!
//! Everything here is a pure function of the current field values; callers
//! re-run it on every change and nothing is cached.

use minijinja::context;

use crate::features::triage::models::{Classification, IncidentDetails, Service, Severity};
use crate::shared::constants::{ANALYSIS_THRESHOLD, DISPATCH_EXCERPT_CHARS};
use crate::shared::templates::{render_template, DISPATCH_ALERT_TEMPLATE};

const FIRE_KEYWORDS: &[&str] = &["fire", "flame", "smoke", "burning"];
const AMBULANCE_KEYWORDS: &[&str] = &["injur", "hurt", "bleed", "accident", "collision", "medical"];
const POLICE_KEYWORDS: &[&str] = &[
    "theft",
    "robb",
    "police",
    "break-in",
    "suspect",
    "weapon",
    "accident",
    "collision",
];

const CRITICAL_KEYWORDS: &[&str] = &["critical", "life-threatening", "explosion"];
const HIGH_KEYWORDS: &[&str] = &["severe", "major", "serious"];
const LOW_KEYWORDS: &[&str] = &["minor", "small"];

const CRITICAL_VICTIMS: u32 = 5;
const HIGH_VICTIMS: u32 = 3;

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn is_analysable(description: &str) -> bool {
    description.chars().count() > ANALYSIS_THRESHOLD
}

/// Services the description calls for, in fire / ambulance / police order.
///
/// Falls back to police for an analysable description that matched nothing.
pub fn predict_services(description: &str) -> Vec<Service> {
    let lowered = description.to_lowercase();
    let mut services = Vec::with_capacity(3);

    for (service, keywords) in [
        (Service::Fire, FIRE_KEYWORDS),
        (Service::Ambulance, AMBULANCE_KEYWORDS),
        (Service::Police, POLICE_KEYWORDS),
    ] {
        if mentions_any(&lowered, keywords) && !services.contains(&service) {
            services.push(service);
        }
    }

    if services.is_empty() && is_analysable(description) {
        services.push(Service::Police);
    }

    services
}

/// First matching rule wins: critical, high, low, then medium.
pub fn predict_severity(description: &str, victims: u32) -> Severity {
    let lowered = description.to_lowercase();

    if mentions_any(&lowered, CRITICAL_KEYWORDS) || victims >= CRITICAL_VICTIMS {
        Severity::Critical
    } else if mentions_any(&lowered, HIGH_KEYWORDS) || victims >= HIGH_VICTIMS {
        Severity::High
    } else if mentions_any(&lowered, LOW_KEYWORDS) || victims == 0 {
        Severity::Low
    } else {
        Severity::Medium
    }
}

fn render_dispatch_message(
    details: &IncidentDetails<'_>,
    severity: Severity,
    services: &[Service],
) -> String {
    if !is_analysable(details.description) {
        return String::new();
    }

    let excerpt: String = details
        .description
        .chars()
        .take(DISPATCH_EXCERPT_CHARS)
        .collect();
    let labels = services
        .iter()
        .map(Service::label)
        .collect::<Vec<_>>()
        .join(" + ");

    let ctx = context! {
        severity => severity.to_string().to_uppercase(),
        excerpt => excerpt,
        location => if details.location.is_empty() { "Pending" } else { details.location },
        victims => details.victims,
        services => labels,
        contact => if details.contact.is_empty() { "N/A" } else { details.contact },
    };

    render_template(DISPATCH_ALERT_TEMPLATE, ctx).unwrap_or_else(|e| {
        tracing::error!("Dispatch message could not be rendered: {}", e);
        String::new()
    })
}

/// Run the full heuristic over a report form.
pub fn classify(details: &IncidentDetails<'_>) -> Classification {
    let services = predict_services(details.description);
    let severity = predict_severity(details.description, details.victims);
    let dispatch_message = render_dispatch_message(details, severity, &services);

    Classification {
        services,
        severity,
        dispatch_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(description: &str, victims: u32) -> IncidentDetails<'_> {
        IncidentDetails {
            description,
            victims,
            ..Default::default()
        }
    }

    #[test]
    fn test_fire_only_description() {
        assert_eq!(
            predict_services("The warehouse is on fire"),
            vec![Service::Fire]
        );
        assert_eq!(
            predict_services("Thick SMOKE coming from the roof"),
            vec![Service::Fire]
        );
    }

    #[test]
    fn test_accident_needs_ambulance_and_police() {
        assert_eq!(
            predict_services("Car accident near the bridge"),
            vec![Service::Ambulance, Service::Police]
        );
    }

    #[test]
    fn test_all_three_services_in_fixed_order() {
        assert_eq!(
            predict_services("Suspect set a fire, two people hurt"),
            vec![Service::Fire, Service::Ambulance, Service::Police]
        );
    }

    #[test]
    fn test_fallback_to_police_only_for_long_descriptions() {
        assert_eq!(
            predict_services("Strange noises next door"),
            vec![Service::Police]
        );
        // exactly ten characters is not enough
        assert!(predict_services("0123456789").is_empty());
        assert_eq!(predict_services("01234567890"), vec![Service::Police]);
        assert!(predict_services("").is_empty());
    }

    #[test]
    fn test_five_victims_is_critical_without_keywords() {
        assert_eq!(predict_severity("", 5), Severity::Critical);
        assert_eq!(predict_severity("minor scrape", 7), Severity::Critical);
    }

    #[test]
    fn test_zero_victims_without_keywords_is_low() {
        assert_eq!(
            predict_severity("Someone is shouting outside", 0),
            Severity::Low
        );
    }

    #[test]
    fn test_critical_keyword_beats_zero_victims() {
        assert_eq!(
            predict_severity("Critical explosion at the mall", 0),
            Severity::Critical
        );
    }

    #[test]
    fn test_severity_priority_order() {
        assert_eq!(predict_severity("Serious flooding", 0), Severity::High);
        assert_eq!(predict_severity("A flooded street", 3), Severity::High);
        assert_eq!(predict_severity("Small kitchen fire", 2), Severity::Low);
        assert_eq!(predict_severity("Major crash but minor damage", 1), Severity::High);
        assert_eq!(predict_severity("A flooded street", 1), Severity::Medium);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            predict_severity("LIFE-THREATENING injuries", 1),
            Severity::Critical
        );
        assert_eq!(
            predict_services("BREAK-IN at the store"),
            vec![Service::Police]
        );
    }

    #[test]
    fn test_fire_with_smoke_example() {
        let result = classify(&details("There is a fire with smoke, 2 victims, need help", 2));
        assert!(result.services.contains(&Service::Fire));
        assert_eq!(result.severity, Severity::Medium);
    }

    #[test]
    fn test_dispatch_message_empty_for_short_descriptions() {
        assert_eq!(classify(&details("", 0)).dispatch_message, "");
        assert_eq!(classify(&details("Help fire!", 0)).dispatch_message, "");
        assert!(!classify(&details("Help, fire!!", 0)).dispatch_message.is_empty());
    }

    #[test]
    fn test_dispatch_message_with_victims_and_defaults() {
        let result = classify(&details("Two cars in a collision on the highway", 2));
        assert_eq!(
            result.dispatch_message,
            "MEDIUM ALERT: Two cars in a collision on the highway... Location: Pending. \
             2 victim(s) reported. Dispatching Ambulance + Police. Contact: N/A."
        );
    }

    #[test]
    fn test_dispatch_message_without_victims_keeps_both_spaces() {
        let result = classify(&IncidentDetails {
            description: "Small fire in a dumpster",
            victims: 0,
            location: "Anna Nagar 2nd Ave",
            contact: "+91 98400 12345",
        });
        assert_eq!(
            result.dispatch_message,
            "LOW ALERT: Small fire in a dumpster... Location: Anna Nagar 2nd Ave.  \
             Dispatching Fire Dept. Contact: +91 98400 12345."
        );
    }

    #[test]
    fn test_dispatch_message_quotes_first_120_characters() {
        let description = "a".repeat(200);
        let result = classify(&details(&description, 1));
        let expected_prefix = format!("MEDIUM ALERT: {}...", "a".repeat(120));
        assert!(result.dispatch_message.starts_with(&expected_prefix));
        assert!(!result.dispatch_message.contains(&"a".repeat(121)));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // Ten emoji: 40 bytes, still too short to analyse
        assert_eq!(classify(&details(&"🔥".repeat(10), 1)).dispatch_message, "");
        assert!(!classify(&details(&"🔥".repeat(11), 1))
            .dispatch_message
            .is_empty());

        let tamil = "தீ".repeat(100);
        let result = classify(&details(&tamil, 1));
        let quoted: String = tamil.chars().take(120).collect();
        assert!(result
            .dispatch_message
            .starts_with(&format!("MEDIUM ALERT: {}...", quoted)));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let input = details("Robbery in progress, suspect has a weapon", 1);
        assert_eq!(classify(&input), classify(&input));
    }
}
