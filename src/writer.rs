//! Filesystem writer for assembled directives.
//!
//! Creates missing zone-config directories with a restrictive mode, writes
//! each directive, and applies the directive's file mode. Ownership is an
//! explicit constructor argument resolved once at startup; unprivileged
//! runs simply leave files owned by the invoking user.

use crate::assembler::WriteDirective;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Writes [`WriteDirective`]s to disk.
pub struct FsWriter {
    /// uid/gid applied to everything written, when running privileged
    ownership: Option<(u32, u32)>,
}

impl FsWriter {
    pub fn new(ownership: Option<(u32, u32)>) -> Self {
        Self { ownership }
    }

    /// Resolve ownership from effective privilege and the configured
    /// owner/group names. Only an effective-root run applies ownership.
    #[cfg(unix)]
    pub fn from_privilege(owner: &str, group: &str) -> Self {
        if users::get_effective_uid() != 0 {
            return Self::new(None);
        }
        let uid = users::get_user_by_name(owner).map(|u| u.uid());
        let gid = users::get_group_by_name(group).map(|g| g.gid());
        match (uid, gid) {
            (Some(uid), Some(gid)) => Self::new(Some((uid, gid))),
            _ => {
                warn!("Unknown owner {} or group {}, not applying ownership", owner, group);
                Self::new(None)
            }
        }
    }

    #[cfg(not(unix))]
    pub fn from_privilege(_owner: &str, _group: &str) -> Self {
        Self::new(None)
    }

    /// Write every directive in order. The first failure aborts the run;
    /// files already written stay in place.
    pub fn write_all(&self, directives: &[WriteDirective]) -> Result<()> {
        for directive in directives {
            self.write(directive)?;
        }
        Ok(())
    }

    /// Write one directive, creating its parent directory if needed.
    pub fn write(&self, directive: &WriteDirective) -> Result<()> {
        if let Some(parent) = directive.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                self.create_dir(parent)?;
            }
        }
        fs::write(&directive.path, &directive.contents)?;
        self.apply_mode(&directive.path, directive.mode)?;
        self.apply_owner(&directive.path)?;
        info!("Wrote {}", directive.path.display());
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        // create_dir modes pass through the umask, so set the mode explicitly
        self.apply_mode(path, crate::config::DIR_MODE)?;
        self.apply_owner(path)?;
        debug!("Created directory {}", path.display());
        Ok(())
    }

    fn apply_mode(&self, path: &Path, mode: u32) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, mode);
        }
        Ok(())
    }

    #[cfg(unix)]
    fn apply_owner(&self, path: &Path) -> Result<()> {
        if let Some((uid, gid)) = self.ownership {
            std::os::unix::fs::chown(path, Some(uid), Some(gid))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn apply_owner(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
