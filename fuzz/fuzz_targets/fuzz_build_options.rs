#![no_main]

use libfuzzer_sys::arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use mongodb_uri_builder::{build, hosts, ConnectionOptions, HostEntry, Port, QueryOption};

#[derive(Debug)]
struct OptionsInput {
    username: Option<String>,
    password: Option<String>,
    hosts: Vec<(Option<String>, Option<u16>)>,
    database: Option<String>,
    options: Vec<(String, String)>,
}

impl<'a> Arbitrary<'a> for OptionsInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> libfuzzer_sys::arbitrary::Result<Self> {
        Ok(Self {
            username: u.arbitrary()?,
            password: u.arbitrary()?,
            hosts: u.arbitrary()?,
            database: u.arbitrary()?,
            options: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: OptionsInput| {
    let opts = ConnectionOptions {
        username: input.username,
        password: input.password,
        host_entries: input
            .hosts
            .into_iter()
            .map(|(host, port)| HostEntry {
                host,
                port: port.map(Port::Number),
            })
            .collect(),
        database: input.database,
        query_options: input
            .options
            .into_iter()
            .map(|(key, value)| QueryOption::new(key, value))
            .collect(),
    };

    let uri = build(&opts);
    assert!(uri.starts_with("mongodb://"));

    // An empty host list still yields the default host
    let host_fragment = hosts(&opts);
    assert!(!host_fragment.is_empty());
});
