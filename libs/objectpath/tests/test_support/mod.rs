//! Shared record types for integration tests

#![allow(dead_code)]

use objectpath::record;

pub struct Person {
    pub name: String,
    pub age: i32,
    pub address: Option<Address>,
}

pub struct Address {
    pub city: String,
    pub street: String,
}

pub struct Employee {
    name: String,
    id: i32,
    department: Department,
}

pub struct Department {
    name: String,
    manager: Manager,
}

pub struct Manager {
    name: String,
    email: String,
}

// Employee, Department and Manager expose getters, like read-only properties.
impl Employee {
    pub fn new(name: &str, id: i32, department: Department) -> Self {
        Self {
            name: name.to_string(),
            id,
            department,
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn id(&self) -> &i32 {
        &self.id
    }

    pub fn department(&self) -> &Department {
        &self.department
    }
}

impl Department {
    pub fn new(name: &str, manager: Manager) -> Self {
        Self {
            name: name.to_string(),
            manager,
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }
}

impl Manager {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn email(&self) -> &String {
        &self.email
    }
}

record!(Person {
    fields: [Name => name, Age => age, Address => address],
});

record!(Address {
    fields: [City => city, Street => street],
});

record!(Employee {
    properties: [Name => name, Id => id, Department => department],
});

record!(Department {
    properties: [Name => name, Manager => manager],
});

record!(Manager {
    properties: [Name => name, Email => email],
});

pub fn person(name: &str, age: i32, city: &str, street: &str) -> Person {
    Person {
        name: name.to_string(),
        age,
        address: Some(Address {
            city: city.to_string(),
            street: street.to_string(),
        }),
    }
}

pub fn people() -> Vec<Person> {
    vec![
        person("John", 30, "New York", "123 Main St"),
        person("Jane", 25, "London", "456 Oxford St"),
        person("Alice", 35, "Paris", "789 Champs-Élysées"),
    ]
}
