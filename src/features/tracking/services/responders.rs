use crate::features::tracking::models::ResponderUnit;
use crate::features::triage::models::Service;

/// Unit the demo dispatches for each service, with its fixed ETA in minutes
fn unit_for(service: Service) -> (&'static str, u32) {
    match service {
        Service::Fire => ("Fire Engine F2", 10),
        Service::Ambulance => ("Ambulance Unit A3", 8),
        Service::Police => ("Police Unit T7", 12),
    }
}

/// One unit per required service, in the report's service order
pub fn responder_units(services: &[Service]) -> Vec<ResponderUnit> {
    services
        .iter()
        .map(|&service| {
            let (name, eta_minutes) = unit_for(service);
            ResponderUnit {
                name: name.to_string(),
                service,
                eta_minutes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_follow_services() {
        let units = responder_units(&[Service::Ambulance, Service::Police]);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].name, "Ambulance Unit A3");
        assert_eq!(units[0].eta_minutes, 8);
        assert_eq!(units[1].name, "Police Unit T7");
        assert_eq!(units[1].eta_minutes, 12);

        assert!(responder_units(&[]).is_empty());
    }
}
