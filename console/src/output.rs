use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Table(String),
    Info(String),
    Warning(String),
    Json(String),
    Quit,
}

pub fn write_output<W: Write>(writer: &mut W, output: &Output) -> io::Result<()> {
    match output {
        Output::Table(table) | Output::Json(table) => writeln!(writer, "{}", table),
        Output::Info(msg) => writeln!(writer, "info {}", msg),
        Output::Warning(msg) => writeln!(writer, "warning {}", msg),
        Output::Quit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(output: Output) -> String {
        let mut buffer = Vec::new();
        write_output(&mut buffer, &output).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(written(Output::Info("ok".to_string())), "info ok\n");
        assert_eq!(written(Output::Warning("no".to_string())), "warning no\n");
        assert_eq!(written(Output::Quit), "");
    }
}
