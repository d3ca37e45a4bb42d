use std::path::PathBuf;

/// Where contact-form submissions end up: the operator's own mailbox.
pub struct ContactRecipient(pub String);

/// Root of the on-disk asset tree served under `/static`.
pub struct StaticDir(pub PathBuf);
