//! Interactive fallback for arguments missing from the command line.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tagcloud_engine::{validate_input_name, validate_output_name};

/// Resolved input name, output name and requested word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Request {
    pub input: String,
    pub output: String,
    pub count: i64,
}

/// Values already given on the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct Given {
    pub input: Option<String>,
    pub output: Option<String>,
    pub count: Option<i64>,
}

/// Fills in whatever `given` lacks by asking on `output` and reading `input`,
/// in the order input name, output name, count. Names are checked as soon as
/// they are known when `check_names` is set.
pub(crate) fn resolve<R: BufRead, W: Write>(
    given: Given,
    check_names: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Request> {
    let in_name = match given.input {
        Some(name) => name,
        None => ask(input, output, "Enter an input file name: ")?,
    };
    if check_names {
        validate_input_name(&in_name)?;
    }

    let out_name = match given.output {
        Some(name) => name,
        None => ask(input, output, "Enter an output file name: ")?,
    };
    if check_names {
        validate_output_name(&out_name)?;
    }

    let count = match given.count {
        Some(count) => count,
        None => {
            let answer = ask(
                input,
                output,
                "Enter the number of words to be included in the generated tag cloud: ",
            )?;
            answer
                .parse::<i64>()
                .with_context(|| format!("{answer:?} is not a whole number"))?
        }
    };

    Ok(Request {
        input: in_name,
        output: out_name,
        count,
    })
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    writeln!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before answering: {}", question.trim());
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn prompts_only_for_missing_values() {
        let mut input = Cursor::new("out.html\n");
        let mut output = Vec::new();
        let given = Given {
            input: Some("in.txt".to_string()),
            output: None,
            count: Some(5),
        };

        let request = resolve(given, true, &mut input, &mut output).unwrap();
        assert_eq!(
            request,
            Request {
                input: "in.txt".to_string(),
                output: "out.html".to_string(),
                count: 5,
            }
        );
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter an output file name: \n"
        );
    }

    #[test]
    fn asks_everything_in_order() {
        let mut input = Cursor::new("  words.txt \ncloud.html\n 12\n");
        let mut output = Vec::new();
        let request = resolve(Given::default(), true, &mut input, &mut output).unwrap();
        assert_eq!(request.count, 12);
        let transcript = String::from_utf8(output).unwrap();
        let input_at = transcript.find("input file").unwrap();
        let output_at = transcript.find("output file").unwrap();
        let count_at = transcript.find("number of words").unwrap();
        assert!(input_at < output_at && output_at < count_at);
    }

    #[test]
    fn bad_input_name_stops_before_next_prompt() {
        let mut input = Cursor::new("words.doc\ncloud.html\n3\n");
        let mut output = Vec::new();
        let err = resolve(Given::default(), true, &mut input, &mut output).unwrap_err();
        assert!(err.to_string().contains("words.doc"));
        assert!(!String::from_utf8(output).unwrap().contains("output file"));
    }

    #[test]
    fn unchecked_names_pass_through() {
        let mut input = Cursor::new("");
        let given = Given {
            input: Some("notes.md".to_string()),
            output: Some("cloud.htm".to_string()),
            count: Some(1),
        };
        assert!(resolve(given, false, &mut input, &mut Vec::new()).is_ok());
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let mut input = Cursor::new("many\n");
        let given = Given {
            input: Some("a.txt".to_string()),
            output: Some("a.html".to_string()),
            count: None,
        };
        assert!(resolve(given, true, &mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        assert!(resolve(Given::default(), true, &mut input, &mut Vec::new()).is_err());
    }
}
