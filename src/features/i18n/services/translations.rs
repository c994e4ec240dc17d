use std::collections::BTreeMap;

use crate::features::i18n::models::Language;

/// (key, English, Tamil)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("nav.home", "Home", "முகப்பு"),
    ("nav.report", "Report", "புகார் செய்"),
    ("nav.track", "Track", "கண்காணி"),
    ("nav.dashboard", "Dashboard", "தகவல் பலகை"),
    ("nav.admin", "Admin", "நிர்வாகம்"),
    ("nav.logout", "Logout", "வெளியேறு"),
    ("auth.title", "Sign In", "உள்நுழைய"),
    ("auth.subtitle", "Rescue with ResQ AI", "ResQ AI உடன் மீட்பு பணியில் சேரவும்"),
    ("auth.email", "Email", "மின்னஞ்சல்"),
    ("auth.password", "Password", "கடவுச்சொல்"),
    ("auth.login", "Login", "உள்நுழை"),
    ("auth.create_account", "Create Account", "கணக்கை உருவாக்கவும்"),
    ("auth.welcome_back", "Welcome Back", "மீண்டும் வருக"),
    ("auth.citizen_login", "Citizen Login", "குடிமகன் உள்நுழைவு"),
    ("auth.responder_login", "Responder Login", "பதிலளிப்பவர் உள்நுழைவு"),
    ("auth.demo.citizen", "Demo Citizen", "டெமோ குடிமகன்"),
    ("auth.demo.admin", "Demo Admin", "டெமோ நிர்வாகி"),
    ("dash.welcome", "Welcome back", "மீண்டும் வருக"),
    ("dash.active_reports", "Active Reports", "செயலில் உள்ள புகார்கள்"),
    ("dash.resolved", "Resolved", "தீர்க்கப்பட்டது"),
    ("dash.community_alerts", "Community Alerts", "சமூக விழிப்பூட்டல்கள்"),
    ("dash.report_emergency", "Report an Emergency", "அவசரகால புகாரை அளியுங்கள்"),
    ("dash.report_desc", "AI will analyze and route to correct teams instantly.", "AI உடனடியாக பகுப்பாய்வு செய்து சரியான குழுக்களுக்கு அனுப்பும்."),
    ("dash.track_previous", "Track Previous Requests", "முந்தைய கோரிக்கைகளை கண்காணிக்கவும்"),
    ("dash.track_desc", "View live status and responder locations on map.", "வரைபடத்தில் நேரடி நிலை மற்றும் பதிலளிப்பவர் இருப்பிடங்களைக் காண்க."),
    ("dash.your_reports", "Your Reports", "உங்கள் புகார்கள்"),
    ("dash.search_placeholder", "Search reports...", "புகாரைத் தேடுங்கள்..."),
    ("dash.stats.this_month", "This Month", "இந்த மாதம்"),
    ("dash.stats.avg_response", "Avg Response", "சராசரி பதில் நேரம்"),
    ("landing.title", "Report Emergencies in Seconds", "வினடிகளில் அவசரகால புகாரை அளியுங்கள்"),
    ("landing.subtitle", "AI automatically alerts Police, Ambulance, and Fire teams with severity classification & proof verification.", "AI தானாகவே போலீஸ், ஆம்புலன்ஸ் மற்றும் தீயணைப்பு குழுக்களுக்கு தீவிர வகைப்பாடு மற்றும் ஆதார சரிபார்ப்புடன் எச்சரிக்கிறது."),
    ("landing.get_started", "Get Started", "தொடங்குங்கள்"),
    ("landing.track_request", "Track Request", "கோரிக்கையை கண்காணி"),
    ("landing.how_it_works", "How It Works", "இது எப்படி செயல்படுகிறது"),
    ("landing.features", "Powerful Features", "சக்திவாய்ந்த அம்சங்கள்"),
    ("landing.trusted", "Trusted by Emergency Services", "அவசரகால சேவைகளால் நம்பப்படுகிறது"),
];

fn pick(entry: &(&'static str, &'static str, &'static str), language: Language) -> &'static str {
    match language {
        Language::En => entry.1,
        Language::Ta => entry.2,
    }
}

/// Look up a UI string. Unknown keys come back unchanged.
pub fn translate(key: &str, language: Language) -> &str {
    TRANSLATIONS
        .iter()
        .find(|entry| entry.0 == key)
        .map(|entry| pick(entry, language))
        .unwrap_or(key)
}

/// Every UI string for one language, keyed by its dotted key
pub fn dictionary(language: Language) -> BTreeMap<&'static str, &'static str> {
    TRANSLATIONS
        .iter()
        .map(|entry| (entry.0, pick(entry, language)))
        .collect()
}
