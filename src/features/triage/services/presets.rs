use serde::Serialize;
use utoipa::ToSchema;

/// Canned report form contents behind the "Demo Fill" buttons
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DemoPreset {
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    #[schema(value_type = String)]
    pub location: &'static str,
    pub victims: u32,
    #[schema(value_type = String)]
    pub contact: &'static str,
    #[schema(value_type = Vec<String>)]
    pub media: &'static [&'static str],
}

const PRESET_MEDIA: &[&str] = &["evidence_photo_01.jpg", "scene_video.mp4"];

static DEMO_PRESETS: &[DemoPreset] = &[
    DemoPreset {
        name: "Building Fire",
        description: "Major fire at a three-storey apartment block, thick smoke on the upper floors and residents trapped on the balcony",
        location: "14 Greams Road, Thousand Lights",
        victims: 4,
        contact: "+91 98400 11223",
        media: PRESET_MEDIA,
    },
    DemoPreset {
        name: "Road Accident",
        description: "Collision between a bus and two motorbikes at the junction, riders are bleeding and need medical help",
        location: "Anna Salai & Mount Road junction",
        victims: 2,
        contact: "+91 98410 44556",
        media: PRESET_MEDIA,
    },
    DemoPreset {
        name: "Robbery",
        description: "Armed robbery at a jewellery shop, suspect fled on foot carrying a weapon",
        location: "T. Nagar, Usman Road",
        victims: 0,
        contact: "+91 99620 77889",
        media: PRESET_MEDIA,
    },
    DemoPreset {
        name: "Gas Explosion",
        description: "Explosion in a restaurant kitchen, life-threatening burns and the fire is spreading to nearby shops",
        location: "Besant Nagar 2nd Avenue",
        victims: 6,
        contact: "+91 90030 99001",
        media: PRESET_MEDIA,
    },
];

pub fn demo_presets() -> &'static [DemoPreset] {
    DEMO_PRESETS
}
