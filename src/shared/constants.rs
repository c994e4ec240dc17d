/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// REPORT FORM
// =============================================================================

/// Shortest description the report form accepts
pub const MIN_DESCRIPTION_LENGTH: u64 = 10;

/// Descriptions of this many characters or fewer get no dispatch message
/// and no fallback service
pub const ANALYSIS_THRESHOLD: usize = 10;

/// Number of description characters quoted in the dispatch message
pub const DISPATCH_EXCERPT_CHARS: usize = 120;

/// The victim counter on the form stops here
pub const MAX_VICTIMS: u32 = 10;

/// Prefix of generated report identifiers
pub const REPORT_ID_PREFIX: &str = "RSQ";

// =============================================================================
// SESSIONS
// =============================================================================

/// Sessions older than this are rejected and pruned on the next sign-in
pub const SESSION_TTL_HOURS: i64 = 12;
