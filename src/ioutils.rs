use super::{Error, Problem, Solution};
use itertools::Itertools;
use std::fs;
use std::str::FromStr;
use std::str::SplitWhitespace;

#[derive(Debug)]
pub struct InstanceFromFile(pub Problem);

impl FromStr for InstanceFromFile {
    type Err = Error;
    fn from_str(file_name: &str) -> Result<InstanceFromFile, Error> {
        Ok(InstanceFromFile(parse_instance(&read_file(file_name)?)?))
    }
}

#[derive(Debug)]
pub struct ReportFromFile(pub Solution);

impl FromStr for ReportFromFile {
    type Err = Error;
    fn from_str(file_name: &str) -> Result<ReportFromFile, Error> {
        Ok(ReportFromFile(parse_report(&read_file(file_name)?)?))
    }
}

fn read_file(file_name: &str) -> Result<String, Error> {
    fs::read_to_string(file_name).map_err(|e| Error::Io {
        path: file_name.to_string(),
        reason: e.to_string(),
    })
}

pub fn next_parse_with_err<'a, T, K>(iter: &mut T) -> Result<K, String>
where
    T: Iterator<Item = &'a str>,
    K: FromStr,
    <K as std::str::FromStr>::Err: std::fmt::Debug,
{
    Ok(iter
        .next()
        .ok_or_else(|| "Line exhausted, but next number was expected".to_string())?
        .parse()
        .map_err(|e| format!("Could not parse number {:?}", e))?)
}

// runs `f` over the tokens of one line, which must consume all of them
fn parse_line<T, F>(line_no: usize, line: &str, f: F) -> Result<T, Error>
where
    F: FnOnce(&mut SplitWhitespace) -> Result<T, String>,
{
    let mut iter = line.split_whitespace();
    f(&mut iter)
        .and_then(|parsed| match iter.next() {
            None => Ok(parsed),
            Some(extra) => Err(format!("Line was not exhausted, unexpected {:?}", extra)),
        })
        .map_err(|reason| Error::Parse {
            line: line_no,
            reason,
        })
}

/// Instance format: a header line `N K` followed by N lines `value weight`.
/// Blank lines are skipped, line numbers in errors are 1-based.
pub fn parse_instance(text: &str) -> Result<Problem, Error> {
    let end_line = text.lines().count() + 1;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_no, header) = lines.next().ok_or_else(|| Error::Parse {
        line: end_line,
        reason: "Missing header line `N K`".to_string(),
    })?;
    let (size, capacity): (usize, u32) = parse_line(header_no, header, |iter| {
        Ok((next_parse_with_err(iter)?, next_parse_with_err(iter)?))
    })?;

    let pairs = (0..size)
        .map(|i| {
            let (line_no, line) = lines.next().ok_or_else(|| Error::Parse {
                line: end_line,
                reason: format!("Expected {} items, but file ended after {}", size, i),
            })?;
            parse_line(line_no, line, |iter| -> Result<(u32, u32), String> {
                Ok((next_parse_with_err(iter)?, next_parse_with_err(iter)?))
            })
        })
        .collect::<Result<Vec<(u32, u32)>, Error>>()?;

    if let Some((line_no, _)) = lines.next() {
        return Err(Error::Parse {
            line: line_no,
            reason: format!("Expected only {} items", size),
        });
    }

    Problem::from_items(capacity, pairs)
}

/// Report format: `value flag`, then optionally the 0/1 inclusion vector.
pub fn parse_report(text: &str) -> Result<Solution, Error> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (head_no, head) = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        reason: "Missing `value flag` line".to_string(),
    })?;
    let value = parse_line(head_no, head, |iter| {
        let value: u64 = next_parse_with_err(iter)?;
        let _flag: u8 = next_parse_with_err(iter)?;
        Ok(value)
    })?;

    let items = match lines.next() {
        Some((line_no, line)) => Some(
            line.split_whitespace()
                .map(|bit| match bit {
                    "1" => Ok(true),
                    "0" => Ok(false),
                    _ => Err(Error::Parse {
                        line: line_no,
                        reason: format!("Selection bit {:?} is not in (0, 1)", bit),
                    }),
                })
                .collect::<Result<Vec<_>, Error>>()?,
        ),
        None => None,
    };
    Ok(Solution { value, items })
}

pub fn format_report(solution: &Solution, flag: u8) -> String {
    let mut output = format!("{} {}", solution.value, flag);
    if let Some(items) = &solution.items {
        output += "\n";
        output += items
            .iter()
            .map(|&i| if i { "1" } else { "0" })
            .join(" ")
            .as_str();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_an_instance() {
        let problem = parse_instance("3 50\n60 10\n100 20\n120 30\n").unwrap();
        assert_eq!(problem.capacity(), 50);
        assert_eq!(problem.len(), 3);
        assert_eq!(problem.items()[2].value, 120);
        assert_eq!(problem.items()[2].weight, 30);
        assert_eq!(problem.items()[2].index, 2);
    }

    #[test]
    fn blank_lines_and_extra_spaces_are_ignored() {
        let problem = parse_instance("\n  2   7 \n\n 1  2\n3 4\n\n").unwrap();
        assert_eq!(problem.capacity(), 7);
        assert_eq!(problem.total_value(), 4);
    }

    #[test]
    fn empty_instance() {
        let problem = parse_instance("0 10\n").unwrap();
        assert!(problem.is_empty());
    }

    #[test]
    fn bad_number_reports_its_line() {
        match parse_instance("2 10\n1 2\n3 x\n") {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_items_are_an_error() {
        match parse_instance("3 10\n1 2\n") {
            Err(Error::Parse { line, reason }) => {
                assert_eq!(line, 3);
                assert_eq!(reason, "Expected 3 items, but file ended after 1");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn trailing_tokens_and_lines_are_rejected() {
        assert!(matches!(
            parse_instance("1 10\n1 2 3\n"),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_instance("1 10\n1 2\n5 5\n"),
            Err(Error::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn zero_weight_in_file_is_rejected() {
        assert_eq!(
            parse_instance("2 10\n1 2\n3 0\n").unwrap_err(),
            Error::ZeroWeight { index: 1 }
        );
    }

    #[test]
    fn formats_value_flag_and_selection() {
        let solution = Solution {
            value: 220,
            items: Some(vec![false, true, true]),
        };
        assert_eq!(format_report(&solution, 1), "220 1\n0 1 1");
        assert_eq!(format_report(&Solution::value_only(220), 0), "220 0");
    }

    #[test]
    fn reads_a_report() {
        assert_eq!(
            parse_report("220 1\n0 1 1\n").unwrap(),
            Solution {
                value: 220,
                items: Some(vec![false, true, true]),
            }
        );
        assert_eq!(parse_report("220 0").unwrap(), Solution::value_only(220));
        assert!(matches!(
            parse_report("220 1\n0 2 1"),
            Err(Error::Parse { line: 2, .. })
        ));
    }
}
