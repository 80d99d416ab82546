// Flight detail card
use serde::Serialize;

use super::display::{
    PLACEHOLDER, format_coordinate, format_degrees, format_feet, format_knots, format_timestamp,
    format_vertical_rate, text_or_placeholder,
};
use super::flight::FlightDetail;
use super::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "camelCase")]
pub enum Badge {
    Airborne,
    OnGround,
    Emergency(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailCard {
    pub id: u64,
    pub title: String,
    pub badges: Vec<Badge>,
    pub fields: Vec<DetailField>,
    pub map_href: String,
}

fn field(label: &'static str, value: String) -> DetailField {
    DetailField { label, value }
}

impl DetailCard {
    pub fn from_flight(flight: &FlightDetail) -> Self {
        let mut badges = vec![if flight.on_ground {
            Badge::OnGround
        } else {
            Badge::Airborne
        }];
        if flight.has_emergency() {
            if let Some(status) = &flight.emergency_status {
                badges.push(Badge::Emergency(status.clone()));
            }
        }

        let emergency = match flight.emergency_status.as_deref() {
            Some(status) if !status.is_empty() => status.to_string(),
            _ => "None".to_string(),
        };

        let fields = vec![
            field("ID", flight.id.to_string()),
            field("Hex ICAO", text_or_placeholder(flight.hex_icao.as_deref())),
            field("Registration", text_or_placeholder(flight.registration.as_deref())),
            field("Aircraft Type", text_or_placeholder(flight.aircraft_type.as_deref())),
            field("Flight", text_or_placeholder(flight.flight.as_deref())),
            field("Squawk", text_or_placeholder(flight.squawk.as_deref())),
            field("Category", text_or_placeholder(flight.category.as_deref())),
            field("Latitude", format_coordinate(flight.latitude)),
            field("Longitude", format_coordinate(flight.longitude)),
            field("Barometric Altitude", format_feet(flight.altitude_baro)),
            field("Geometric Altitude", format_feet(flight.altitude_geom)),
            field("Ground Speed", format_knots(flight.ground_speed)),
            field("Track", format_degrees(flight.track)),
            field("Vertical Rate", format_vertical_rate(flight.vertical_rate)),
            field("Emergency Status", emergency),
            field(
                "DB Flags",
                flight
                    .db_flags
                    .map_or_else(|| PLACEHOLDER.to_string(), |flags| flags.to_string()),
            ),
            field("On Ground", if flight.on_ground { "Yes" } else { "No" }.to_string()),
            field("First Seen", format_timestamp(flight.first_seen.as_deref())),
            field("Last Seen", format_timestamp(flight.last_seen.as_deref())),
            field(
                "Total Positions",
                flight
                    .total_positions
                    .map_or_else(|| PLACEHOLDER.to_string(), |count| count.to_string()),
            ),
        ];

        Self {
            id: flight.id,
            title: flight
                .flight
                .clone()
                .filter(|callsign| !callsign.is_empty())
                .unwrap_or_else(|| "Unknown Flight".to_string()),
            badges,
            fields,
            map_href: Route::Map {
                focus: Some(flight.id),
            }
            .path(),
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(json: serde_json::Value) -> FlightDetail {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_airborne_without_emergency() {
        let card = DetailCard::from_flight(&detail(serde_json::json!({
            "id": 7, "flight": "RCH123", "altitudeBaro": 35000, "groundSpeed": 450.4,
            "track": 270.0, "emergencyStatus": "none", "onGround": false,
            "firstSeen": "2025-01-15T10:00:00Z", "totalPositions": 120
        })));

        assert_eq!(card.title, "RCH123");
        assert_eq!(card.badges, vec![Badge::Airborne]);
        assert_eq!(card.value("Barometric Altitude"), Some("35,000 ft"));
        assert_eq!(card.value("Ground Speed"), Some("450 kts"));
        assert_eq!(card.value("Emergency Status"), Some("none"));
        assert_eq!(card.value("First Seen"), Some("2025-01-15 10:00:00 UTC"));
        assert_eq!(card.value("Total Positions"), Some("120"));
        assert_eq!(card.map_href, "/map?flight=7");
    }

    #[test]
    fn test_emergency_badge_and_placeholders() {
        let card = DetailCard::from_flight(&detail(serde_json::json!({
            "id": 8, "emergencyStatus": "general", "onGround": true
        })));

        assert_eq!(card.title, "Unknown Flight");
        assert_eq!(
            card.badges,
            vec![Badge::OnGround, Badge::Emergency("general".to_string())]
        );
        assert_eq!(card.value("Hex ICAO"), Some(PLACEHOLDER));
        assert_eq!(card.value("Latitude"), Some(PLACEHOLDER));
        assert_eq!(card.value("DB Flags"), Some(PLACEHOLDER));
        assert_eq!(card.value("On Ground"), Some("Yes"));
    }

    #[test]
    fn test_missing_status_reads_none() {
        let card = DetailCard::from_flight(&detail(serde_json::json!({ "id": 9 })));
        assert_eq!(card.badges, vec![Badge::Airborne]);
        assert_eq!(card.value("Emergency Status"), Some("None"));
    }
}
