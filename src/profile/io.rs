//! Plain-text profile files.
//!
//! Layout, one field per line: strip count, strip thickness, maximum shift,
//! then one factor per strip from top to bottom. Readers accept any
//! whitespace between fields.

use super::ScaleProfile;
use crate::util::{StitchError, StitchResult};
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

impl ScaleProfile {
    /// Writes the profile in text form.
    pub fn write_to<W: Write>(&self, mut out: W) -> StitchResult<()> {
        writeln!(out, "{}", self.factors.len())?;
        writeln!(out, "{}", self.strip_thickness)?;
        writeln!(out, "{}", self.max_shift)?;
        for factor in &self.factors {
            writeln!(out, "{factor}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Reads a profile in text form.
    pub fn read_from<R: Read>(mut input: R) -> StitchResult<Self> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        text.parse()
    }

    /// Writes the profile to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> StitchResult<()> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|err| StitchError::ProfileIo {
            reason: format!("unable to write to file '{}': {err}", path.display()),
        })?;
        self.write_to(BufWriter::new(file))
    }

    /// Reads a profile from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> StitchResult<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|err| StitchError::ProfileIo {
            reason: format!("unable to read from file '{}': {err}", path.display()),
        })?;
        Self::read_from(file)
    }
}

impl FromStr for ScaleProfile {
    type Err = StitchError;

    fn from_str(text: &str) -> StitchResult<Self> {
        let mut tokens = text.split_whitespace();
        let n_strips: usize = next_field(&mut tokens, "strip count")?;
        let strip_thickness: usize = next_field(&mut tokens, "strip thickness")?;
        let max_shift: usize = next_field(&mut tokens, "maximum shift")?;
        let factors = (0..n_strips)
            .map(|_| next_field::<f32>(&mut tokens, "scale factor"))
            .collect::<StitchResult<Vec<_>>>()?;
        ScaleProfile::new(factors, strip_thickness, max_shift)
    }
}

fn next_field<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &str,
) -> StitchResult<T> {
    let token = tokens.next().ok_or_else(|| StitchError::ProfileParse {
        reason: format!("missing {field}"),
    })?;
    token.parse().map_err(|_| StitchError::ProfileParse {
        reason: format!("invalid {field} '{token}'"),
    })
}

#[cfg(test)]
mod tests {
    use crate::profile::ScaleProfile;
    use crate::util::StitchError;

    #[test]
    fn writes_one_field_per_line() {
        let profile = ScaleProfile::new(vec![1.5, 1.0], 10, 6).unwrap();
        let mut buf = Vec::new();
        profile.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2\n10\n6\n1.5\n1\n");
    }

    #[test]
    fn reads_whitespace_separated_fields() {
        let profile: ScaleProfile = "3 4 9\n1.25 1\n 3".parse().unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.strip_thickness(), 4);
        assert_eq!(profile.max_shift(), 9);
        assert_eq!(profile.factors(), &[1.25, 1.0, 3.0]);
    }

    #[test]
    fn short_file_is_a_parse_error() {
        let err = "3\n4\n9\n1.0\n".parse::<ScaleProfile>().unwrap_err();
        assert_eq!(
            err,
            StitchError::ProfileParse {
                reason: "missing scale factor".to_string(),
            }
        );
        assert!("x".parse::<ScaleProfile>().is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ScaleProfile::load("no/such/profile.psf").unwrap_err();
        assert!(matches!(err, StitchError::ProfileIo { .. }));
    }
}
