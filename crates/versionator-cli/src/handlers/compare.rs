//! Compare command handler

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::{ComparisonReport, OutputWriter};
use tracing::{debug, instrument};
use versionator_core::Version;

/// Handle the compare command
#[instrument(skip(output), fields(left = %args.left, right = %args.right))]
pub fn handle_compare(args: CompareArgs, output: &mut OutputWriter) -> Result<()> {
    let left = Version::parse(&args.left)?;
    let right = Version::parse(&args.right)?;
    let ordering = left.compare(&right)?;
    debug!(?ordering, "Versions compared");

    output.comparison(&ComparisonReport::new(args.left, args.right, ordering))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::Error;
    use crate::output::tests::writer;

    fn compare(left: &str, right: &str) -> Result<String> {
        let (mut out, buffer) = writer(OutputFormat::Human, false, 0);
        handle_compare(
            CompareArgs {
                left: left.to_string(),
                right: right.to_string(),
            },
            &mut out,
        )?;
        Ok(buffer.contents())
    }

    #[test]
    fn test_padding_and_ordering() {
        assert_eq!(compare("1.2", "1.2.0").unwrap(), "1.2 = 1.2.0\n");
        assert_eq!(compare("2.0", "2.0.1").unwrap(), "2.0 < 2.0.1\n");
        assert_eq!(compare("10.0", "9.9").unwrap(), "10.0 > 9.9\n");
        assert_eq!(compare("end-of-time", "99999").unwrap(), "end-of-time > 99999\n");
    }

    #[test]
    fn test_textual_versions() {
        assert_eq!(compare("alpha", "beta").unwrap(), "alpha < beta\n");
    }

    #[test]
    fn test_mixed_versions_fail() {
        assert!(matches!(compare("1.0", "latest"), Err(Error::Core(_))));
    }

    #[test]
    fn test_malformed_version_fails() {
        assert!(matches!(compare("1.x.3", "1.0"), Err(Error::Core(_))));
    }
}
