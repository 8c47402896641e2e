use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, Entity, UserId, require_non_empty};

/// Length of an owner's tax id, punctuation included (e.g. `123.456.789-01`).
pub const TAX_ID_LEN: usize = 14;

/// Minimum password length accepted by login.
pub const MIN_LOGIN_PASSWORD_LEN: usize = 4;

/// Role of a user, with the fields each role adds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Owner {
        tax_id: String,
    },
    /// Delivery agent. Carried in the model; the service never creates one.
    Courier {
        vehicle: String,
        plate: String,
    },
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Owner { .. } => "owner",
            UserRole::Courier { .. } => "courier",
        }
    }
}

/// Entity: User.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password: String,
    address: String,
    #[serde(flatten)]
    role: UserRole,
}

impl User {
    /// Materialize a validated registration under a freshly allocated id.
    pub fn register(id: UserId, cmd: RegisterUser) -> Self {
        Self {
            id,
            name: cmd.name,
            email: cmd.email,
            password: cmd.password,
            address: cmd.address,
            role: cmd.role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn is_owner(&self) -> bool {
        matches!(self.role, UserRole::Owner { .. })
    }

    pub fn is_customer(&self) -> bool {
        matches!(self.role, UserRole::Customer)
    }

    /// Tax id, for owners only.
    pub fn tax_id(&self) -> Option<&str> {
        match &self.role {
            UserRole::Owner { tax_id } => Some(tax_id),
            _ => None,
        }
    }

    /// Plaintext credential comparison.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Command: register a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub role: UserRole,
}

impl RegisterUser {
    pub fn customer(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            address: address.into(),
            role: UserRole::Customer,
        }
    }

    pub fn owner(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        address: impl Into<String>,
        tax_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            address: address.into(),
            role: UserRole::Owner {
                tax_id: tax_id.into(),
            },
        }
    }

    /// Field validation. Uniqueness of the email is checked by the caller
    /// against the registered users.
    pub fn validate(&self) -> DomainResult<()> {
        require_non_empty(&self.name, "name")?;
        validate_email(&self.email)?;
        require_non_empty(&self.password, "password")?;
        require_non_empty(&self.address, "address")?;

        match &self.role {
            UserRole::Customer => Ok(()),
            UserRole::Owner { tax_id } => validate_tax_id(tax_id),
            UserRole::Courier { vehicle, plate } => {
                require_non_empty(vehicle, "vehicle")?;
                require_non_empty(plate, "plate")
            }
        }
    }
}

fn validate_email(email: &str) -> DomainResult<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(DomainError::invalid_argument("email must contain '@'"));
    }
    Ok(())
}

/// Tax ids are exactly 14 characters and never contain `/`.
pub fn validate_tax_id(tax_id: &str) -> DomainResult<()> {
    if tax_id.chars().count() != TAX_ID_LEN || tax_id.contains('/') {
        return Err(DomainError::invalid_argument(format!(
            "tax id must have {TAX_ID_LEN} characters and no '/'"
        )));
    }
    Ok(())
}

/// Shape check for login credentials (before any lookup).
pub fn validate_login(email: &str, password: &str) -> DomainResult<()> {
    validate_email(email)?;
    if password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
        return Err(DomainError::invalid_argument(format!(
            "password must have at least {MIN_LOGIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
