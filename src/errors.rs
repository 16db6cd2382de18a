// ============================================================
// Error messages — every failed call aborts with one of these
// and reverts all of its storage writes.
// ============================================================

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_PAUSED: &str = "Minting is paused";
pub const ERR_DAILY_LIMIT_EXCEEDED: &str = "Daily mint limit exceeded";
pub const ERR_ALREADY_APPROVED: &str = "Already approved";
pub const ERR_ALREADY_FINALIZED: &str = "Already finalized";
pub const ERR_NOT_FOUND: &str = "Mint operation not found";
pub const ERR_CLAIM_FAILED: &str = "Ownership claim failed";
pub const ERR_ALREADY_INITIALIZED: &str = "Already initialized";

// Configuration
pub const ERR_NOT_INITIALIZED: &str = "Not initialized";
pub const ERR_INVALID_APPROVAL_COUNT: &str = "Invalid approval count";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_REGISTRY_NOT_SET: &str = "Registry not set";
