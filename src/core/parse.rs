use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::OptionsError;
use crate::fs::FileSystem;
use crate::models::{PathKind, TruffulaOptions};

/// Marks hidden entries for inclusion in the listing.
const FLAG_SHOW_HIDDEN: &str = "-h";
/// Disables ANSI color in the output.
const FLAG_NO_COLOR: &str = "-nc";

/// Parse raw command-line tokens (program name excluded) into validated
/// options.
///
/// The final token is always the target directory, even when it looks like a
/// flag. Every token before it must be one of the recognized flags. The
/// target is resolved to an absolute path and must name an existing
/// directory.
pub async fn parse_options<F, S>(fs: &F, args: &[S]) -> Result<TruffulaOptions, OptionsError>
where
    F: FileSystem,
    S: AsRef<OsStr>,
{
    let Some((path_token, flag_tokens)) = args.split_last() else {
        return Err(OptionsError::InvalidArgument(
            "no target directory given".to_owned(),
        ));
    };

    let mut show_hidden = false;
    let mut use_color = true;

    // Flag scanning completes before any filesystem access, so a bad flag
    // wins over a bad path.
    for token in flag_tokens {
        let token = token.as_ref();
        if token == FLAG_SHOW_HIDDEN {
            show_hidden = true;
        } else if token == FLAG_NO_COLOR {
            use_color = false;
        } else {
            return Err(OptionsError::InvalidArgument(format!(
                "unrecognized flag '{}'",
                token.to_string_lossy()
            )));
        }
    }

    let root = resolve_root(fs, Path::new(path_token.as_ref())).await?;

    Ok(TruffulaOptions {
        root,
        show_hidden,
        use_color,
    })
}

/// Absolutize the target lexically (no symlink resolution), then require an
/// existing directory. A target that is missing, unreadable, or not a
/// directory all surface as the same not-found error.
async fn resolve_root<F: FileSystem>(fs: &F, path: &Path) -> Result<PathBuf, OptionsError> {
    let absolute =
        std::path::absolute(path).map_err(|_| OptionsError::PathNotFound(path.to_path_buf()))?;

    match fs.path_kind(&absolute).await {
        Ok(PathKind::Directory) => Ok(absolute),
        _ => Err(OptionsError::PathNotFound(absolute)),
    }
}
