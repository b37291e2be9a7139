/// A front end path broken into the parts access control cares about
///
/// `/main/products/new` has prefix `main`, resource `products` and rest
/// `["new"]`. Query strings and fragments are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePath<'a> {
    pub prefix: Option<&'a str>,
    pub resource: Option<&'a str>,
    pub rest: Vec<&'a str>,
}

impl<'a> RoutePath<'a> {
    pub fn parse(path: &'a str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/');

        // Paths are absolute, anything before the first slash is not a segment
        let _ = segments.next();

        let prefix = segments.next().filter(|x| !x.is_empty());
        let resource = segments.next().filter(|x| !x.is_empty());
        let rest = segments.filter(|x| !x.is_empty()).collect();
        Self {
            prefix,
            resource,
            rest,
        }
    }
}
