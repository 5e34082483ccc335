use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::node_address::NodeAddress;

impl NodeAddress {
    pub fn new(host: &str, port: u16) -> NodeAddress {
        NodeAddress { host: host.to_string(), port }
    }
}

impl From<(String, u16)> for NodeAddress {
    fn from((host, port): (String, u16)) -> Self {
        NodeAddress { host, port }
    }
}

impl From<NodeAddress> for (String, u16) {
    fn from(address: NodeAddress) -> Self {
        (address.host, address.port)
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
