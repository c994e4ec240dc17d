use chrono::{DateTime, Duration, Utc};

use crate::features::reports::models::{Report, ReportStatus};
use crate::features::triage::models::IncidentDetails;
use crate::features::triage::services::classify;
use crate::shared::constants::REPORT_ID_PREFIX;

struct SeedReport {
    minutes_ago: i64,
    description: &'static str,
    location: &'static str,
    victims: u32,
    contact: &'static str,
    media: &'static [&'static str],
    reporter_name: &'static str,
    status: ReportStatus,
}

const SEED_REPORTS: &[SeedReport] = &[
    SeedReport {
        minutes_ago: 4,
        description: "Major fire at a textile warehouse, thick smoke spreading to nearby homes. Two workers trapped inside, one injured with burns.",
        location: "Ambattur Industrial Estate, Chennai",
        victims: 2,
        contact: "+91 98400 11223",
        media: &["warehouse_fire.jpg"],
        reporter_name: "Priya Raman",
        status: ReportStatus::Dispatched,
    },
    SeedReport {
        minutes_ago: 17,
        description: "Collision between a bus and two bikes near the flyover, several people injured and bleeding.",
        location: "Kathipara Junction, Guindy",
        victims: 5,
        contact: "+91 94440 55678",
        media: &["junction_1.jpg", "junction_2.jpg"],
        reporter_name: "Arun Kumar",
        status: ReportStatus::OnTheWay,
    },
    SeedReport {
        minutes_ago: 42,
        description: "Armed robbery at a jewellery shop, suspect fled on a motorcycle towards the beach road.",
        location: "T. Nagar, Usman Road",
        victims: 1,
        contact: "+91 99620 33445",
        media: &[],
        reporter_name: "Lakshmi Narayanan",
        status: ReportStatus::InProgress,
    },
    SeedReport {
        minutes_ago: 95,
        description: "Elderly man collapsed at the bus stop, needs medical attention, breathing is shallow.",
        location: "Adyar Bus Depot",
        victims: 1,
        contact: "+91 90031 77889",
        media: &[],
        reporter_name: "Meena S",
        status: ReportStatus::Resolved,
    },
    SeedReport {
        minutes_ago: 160,
        description: "Minor kitchen fire in a small restaurant, put out but smoke still in the building.",
        location: "Mylapore, Kutchery Road",
        victims: 0,
        contact: "",
        media: &["kitchen.jpg"],
        reporter_name: "Karthik V",
        status: ReportStatus::Resolved,
    },
];

/// Demo reports, classified the same way live submissions are
pub(super) fn demo_reports(now: DateTime<Utc>) -> Vec<Report> {
    SEED_REPORTS
        .iter()
        .map(|seed| {
            let created_at = now - Duration::minutes(seed.minutes_ago);
            let classification = classify(&IncidentDetails {
                description: seed.description,
                victims: seed.victims,
                location: seed.location,
                contact: seed.contact,
            });

            Report {
                id: format!("{}-{}", REPORT_ID_PREFIX, created_at.timestamp_millis()),
                description: seed.description.to_string(),
                severity: classification.severity,
                services: classification.services,
                status: seed.status,
                location: seed.location.to_string(),
                victims: seed.victims,
                contact: seed.contact.to_string(),
                created_at,
                media: seed.media.iter().map(|m| m.to_string()).collect(),
                dispatch_message: classification.dispatch_message,
                reporter_name: seed.reporter_name.to_string(),
                reporter_id: None,
            }
        })
        .collect()
}
