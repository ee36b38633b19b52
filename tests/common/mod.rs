use json_projection::{Member, Projectable};

pub struct Address {
    pub city: String,
    pub state: String,
}

impl Address {
    pub fn new(city: &str, state: &str) -> Address {
        Address {
            city: city.to_string(),
            state: state.to_string(),
        }
    }
}

impl Projectable for Address {
    fn field(&self, name: &str) -> Option<Member<'_>> {
        match name {
            "City" => Some(Member::value(self.city.clone())),
            "State" => Some(Member::value(self.state.clone())),
            _ => None,
        }
    }
}

pub struct User {
    pub name: String,
    pub id: i64,
    pub supervisor: Option<Box<User>>,
    pub addresses: Vec<Address>,
}

impl User {
    pub fn new(name: &str, id: i64) -> User {
        User {
            name: name.to_string(),
            id,
            supervisor: None,
            addresses: Vec::new(),
        }
    }
}

impl Projectable for User {
    fn field(&self, name: &str) -> Option<Member<'_>> {
        match name {
            "Name" => Some(Member::value(self.name.clone())),
            "Id" => Some(Member::value(self.id)),
            "Supervisor" => Some(Member::optional(self.supervisor.as_deref())),
            "Addresses" => Some(Member::collection(&self.addresses)),
            _ => None,
        }
    }

    fn call(&self, name: &str) -> Option<Member<'_>> {
        match name {
            "Over" => Some(Member::value(self.id > 100)),
            "Upper" => Some(Member::value(self.name.to_uppercase())),
            _ => None,
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
