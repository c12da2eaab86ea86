use avl_set::avl_tree::AvlSet;
use log::{info, LevelFilter, SetLoggerError};
use simplelog::SimpleLogger;
use std::env;
use std::error;
use std::fmt;
use std::num::ParseIntError;
use std::process;
use std::result;

const DEFAULT_KEYS: [i64; 6] = [10, 20, 30, 40, 50, 25];

#[derive(Debug)]
pub enum Error {
    InvalidKey(String, ParseIntError),
    Logger(SetLoggerError),
}

impl From<SetLoggerError> for Error {
    fn from(err: SetLoggerError) -> Error {
        Error::Logger(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidKey(_, error) => Some(error),
            Error::Logger(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidKey(arg, error) => write!(f, "invalid key `{}`: {}", arg, error),
            Error::Logger(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, PartialEq)]
struct Config {
    verbose: bool,
    keys: Vec<i64>,
}

impl Config {
    fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut verbose = false;
        let mut keys = Vec::new();
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                _ => {
                    let key = arg.parse::<i64>().map_err(|err| Error::InvalidKey(arg.clone(), err))?;
                    keys.push(key);
                },
            }
        }
        if keys.is_empty() {
            keys.extend_from_slice(&DEFAULT_KEYS);
        }
        Ok(Config { verbose, keys })
    }
}

fn run(config: Config) -> Result<String> {
    let level = if config.verbose { LevelFilter::Trace } else { LevelFilter::Info };
    SimpleLogger::init(level, simplelog::Config::default())?;
    Ok(insert_all(&config.keys))
}

fn insert_all(keys: &[i64]) -> String {
    let mut set = AvlSet::new();
    for key in keys {
        if set.insert(*key) {
            info!("inserted {}", key);
        } else {
            info!("{} already present", key);
        }
    }
    set.preorder().map(|key| key.to_string()).collect::<Vec<String>>().join(" ")
}

fn main() {
    let result = Config::from_args(env::args().skip(1)).and_then(run);
    match result {
        Ok(traversal) => println!("{}", traversal),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{insert_all, Config, Error, DEFAULT_KEYS};

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_default_keys() {
        let config = Config::from_args(args(&[])).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.keys, DEFAULT_KEYS.to_vec());
    }

    #[test]
    fn test_verbose_and_keys() {
        let config = Config::from_args(args(&["-v", "3", "-1"])).unwrap();
        assert!(config.verbose);
        assert_eq!(config.keys, vec![3, -1]);
    }

    #[test]
    fn test_invalid_key() {
        match Config::from_args(args(&["1", "two"])) {
            Err(Error::InvalidKey(arg, _)) => assert_eq!(arg, "two"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_insert_all() {
        assert_eq!(insert_all(&DEFAULT_KEYS), "30 20 10 25 40 50");
        assert_eq!(insert_all(&[2, 2, 1]), "2 1");
    }
}
