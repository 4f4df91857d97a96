// Arguments stay raw; the controller validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { color: String, status: String },
    Init,
    Usage,
}

impl Command {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [color, status] => Command::Set {
                color: color.as_ref().to_string(),
                status: status.as_ref().to_string(),
            },
            [cmd] if cmd.as_ref() == "init" => Command::Init,
            _ => Command::Usage,
        }
    }
}

pub fn usage(progname: &str) -> String {
    format!("Usage:\n\n {progname} {{red|green|blue}} {{on|off}}\n {progname} init\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_args_are_a_set_command() {
        assert_eq!(
            Command::from_args(&["red", "on"]),
            Command::Set {
                color: "red".into(),
                status: "on".into()
            }
        );
        // validated later, not here
        assert_eq!(
            Command::from_args(&["purple", "maybe"]),
            Command::Set {
                color: "purple".into(),
                status: "maybe".into()
            }
        );
    }

    #[test]
    fn init_and_everything_else() {
        assert_eq!(Command::from_args(&["init"]), Command::Init);
        assert_eq!(Command::from_args::<&str>(&[]), Command::Usage);
        assert_eq!(Command::from_args(&["red"]), Command::Usage);
        assert_eq!(Command::from_args(&["INIT"]), Command::Usage);
        assert_eq!(Command::from_args(&["init", "now", "please"]), Command::Usage);
    }

    #[test]
    fn usage_text() {
        assert_eq!(
            usage("nled"),
            "Usage:\n\n nled {red|green|blue} {on|off}\n nled init\n\n"
        );
    }
}
