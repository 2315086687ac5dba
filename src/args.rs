use clap::{ArgAction, Parser};
use mydig::{DNSClass, DNSType, PolicyKind};

#[derive(Parser, Debug)]
#[command(about, version)]
pub(crate) struct Args {
    /// Domain name to look up
    pub(crate) name: String,
    #[arg(long = "type", short = 't', default_value = "A")]
    pub(crate) qtype: DNSType,
    #[arg(long, short = 'c', default_value = "IN")]
    pub(crate) class: DNSClass,
    /// Resolver address, with or without a port
    #[arg(long, short)]
    pub(crate) server: Option<String>,
    #[arg(long, short)]
    pub(crate) port: Option<u16>,
    /// How long to wait for an answer, e.g. 3s or 500ms
    #[arg(long)]
    pub(crate) timeout: Option<String>,
    /// How many times to resend the query after a timeout
    #[arg(long)]
    pub(crate) retries: Option<u32>,
    #[arg(long, default_value_t = false)]
    pub(crate) no_recurse: bool,
    /// strict or lenient
    #[arg(long)]
    pub(crate) policy: Option<PolicyKind>,
    #[arg(long)]
    pub(crate) config: Option<String>,
    #[arg(long, short, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "mydig", "echevarria.io", "-t", "ns", "-s", "1.1.1.1", "--no-recurse", "--policy", "lenient", "-vv",
        ]).unwrap();

        assert_eq!(args.name, "echevarria.io");
        assert_eq!(args.qtype, DNSType::NS);
        assert_eq!(args.class, DNSClass::IN);
        assert_eq!(args.server.as_deref(), Some("1.1.1.1"));
        assert!(args.no_recurse);
        assert_eq!(args.policy, Some(PolicyKind::Lenient));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(Args::try_parse_from(["mydig", "a.io", "-t", "BOGUS"]).is_err());
    }
}
