pub const ERR_IDENTITY_ALREADY_EXISTS: &str = "Identity already exists";
pub const ERR_IDENTITY_NOT_FOUND: &str = "Identity not found";
