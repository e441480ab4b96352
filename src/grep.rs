//! Searching a list of files and printing every match

use std::io::{self, Write};
use std::path::Path;

use log::{debug, trace};

use crate::hexdump::HexDump;
use crate::mapped_file::MappedFile;
use crate::options::Options;
use crate::pattern::Pattern;
use crate::scanner::BoyerMoore;
use crate::Matcher;

///
/// Totals of a run over several files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    ///
    /// Number of matches, all files together
    pub matches: usize,
    ///
    /// Number of files that couldn't be searched
    pub errors: usize,
}
impl Summary {
    ///
    /// Exit status like grep : 0 when something matched, 2 on errors without
    /// any match, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.matches > 0 {
            0
        } else if self.errors > 0 {
            2
        } else {
            1
        }
    }
}

///
/// Searches one pattern in files, printing each match as a hex dump
pub struct Grep {
    matcher: BoyerMoore,
    dump: HexDump,
}
impl Grep {
    pub fn new(pattern: Pattern, options: &Options) -> Self {
        debug!("Options : {:?}", options);
        Self {
            matcher: BoyerMoore::new(pattern),
            dump: HexDump::new(options),
        }
    }
    ///
    /// Search all the `paths`, in order. A file that can't be read is reported on
    /// `err` and counted, the next ones are still searched.
    /// Only a failure to write on `out` or `err` stops the run.
    pub fn run<P, O, E>(&self, paths: &[P], out: &mut O, err: &mut E) -> io::Result<Summary>
    where
        P: AsRef<Path>,
        O: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        for path in paths {
            let path = path.as_ref();
            let file = match MappedFile::open(path) {
                Ok(Some(file)) => file,
                Ok(None) => continue,
                Err(error) => {
                    writeln!(err, "{error}")?;
                    summary.errors += 1;
                    continue;
                }
            };
            let count = self.write_matches(&file, &path.display().to_string(), out)?;
            debug!("{}: {} match(es)", path.display(), count);
            summary.matches += count;
        }
        debug!("{:?}", summary);
        Ok(summary)
    }
    ///
    /// Print all the matches of `buffer` under the header `---- name ----`,
    /// written before the first match only
    pub fn write_matches<O: Write>(&self, buffer: &[u8], name: &str, out: &mut O) -> io::Result<usize> {
        let mut count = 0;
        for m in self.matcher.find_iter(buffer) {
            if count == 0 {
                writeln!(out, "---- {name} ----")?;
            }
            trace!("{name}: match at {:#x}", m.offset);
            self.dump.write_match(out, buffer, &m)?;
            count += 1;
        }
        Ok(count)
    }
    pub fn matcher(&self) -> &BoyerMoore {
        &self.matcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grep(pattern: &[u8], options: &Options) -> Grep {
        Grep::new(Pattern::new(pattern).unwrap(), options)
    }

    #[test]
    fn test_exit_code() {
        let code = |matches, errors| Summary { matches, errors }.exit_code();
        assert_eq!(code(3, 0), 0);
        assert_eq!(code(3, 1), 0);
        assert_eq!(code(0, 1), 2);
        assert_eq!(code(0, 0), 1);
    }

    #[test]
    fn test_write_matches() {
        let grep = grep(b"AB", Options::default().set_before(1).set_after(1));
        let mut out = Vec::new();
        let count = grep.write_matches(b"CABABD", "mem", &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "---- mem ----\n",
                "00000000  43 41 42 41                                      |CABA            |\n",
                "\n",
                "00000000        42 41 42 44                                |  BABD          |\n",
                "\n",
            )
        );
    }

    #[test]
    fn test_no_header_without_match() {
        let grep = grep(b"ZZ", &Options::default());
        let mut out = Vec::new();
        assert_eq!(grep.write_matches(b"CABABD", "mem", &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
