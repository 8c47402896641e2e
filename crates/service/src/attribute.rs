//! Attribute names accepted by the `*_attribute` lookups.
//!
//! Names are matched case-insensitively. Both the Portuguese names (`nome`,
//! `valor`, ...) and English aliases are accepted. Anything else is
//! `UnknownAttribute`.

use core::str::FromStr;

use marketplace_core::DomainError;

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAttribute {
    Id,
    Name,
    Email,
    Password,
    Address,
    TaxId,
    Vehicle,
    Plate,
}

impl FromStr for UserAttribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "id" | "numero" => Ok(UserAttribute::Id),
            "nome" | "name" => Ok(UserAttribute::Name),
            "email" => Ok(UserAttribute::Email),
            "senha" | "password" => Ok(UserAttribute::Password),
            "endereco" | "endereço" | "address" => Ok(UserAttribute::Address),
            "cpf" | "tax_id" | "taxid" => Ok(UserAttribute::TaxId),
            "veiculo" | "veículo" | "vehicle" => Ok(UserAttribute::Vehicle),
            "placa" | "plate" => Ok(UserAttribute::Plate),
            _ => Err(DomainError::unknown_attribute(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterpriseAttribute {
    Id,
    Name,
    Address,
    Cuisine,
    /// Owner's name, resolved through the users collection.
    Owner,
    Opens,
    Closes,
    MarketType,
}

impl FromStr for EnterpriseAttribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "id" => Ok(EnterpriseAttribute::Id),
            "nome" | "name" => Ok(EnterpriseAttribute::Name),
            "endereco" | "endereço" | "address" => Ok(EnterpriseAttribute::Address),
            "tipocozinha" | "cuisine" => Ok(EnterpriseAttribute::Cuisine),
            "dono" | "owner" => Ok(EnterpriseAttribute::Owner),
            "abre" | "opens" => Ok(EnterpriseAttribute::Opens),
            "fecha" | "closes" => Ok(EnterpriseAttribute::Closes),
            "tipomercado" | "market_type" => Ok(EnterpriseAttribute::MarketType),
            _ => Err(DomainError::unknown_attribute(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAttribute {
    Id,
    Name,
    Price,
    Category,
    /// Name of the owning enterprise.
    Enterprise,
}

impl FromStr for ProductAttribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "id" | "produto" => Ok(ProductAttribute::Id),
            "nome" | "name" => Ok(ProductAttribute::Name),
            "valor" | "price" => Ok(ProductAttribute::Price),
            "categoria" | "category" => Ok(ProductAttribute::Category),
            "empresa" | "enterprise" => Ok(ProductAttribute::Enterprise),
            _ => Err(DomainError::unknown_attribute(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAttribute {
    Id,
    /// Customer's name.
    Customer,
    Products,
    State,
    Price,
    /// Enterprise's name.
    Enterprise,
}

impl FromStr for OrderAttribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "id" | "numero" => Ok(OrderAttribute::Id),
            "cliente" | "customer" => Ok(OrderAttribute::Customer),
            "produtos" | "products" => Ok(OrderAttribute::Products),
            "estado" | "state" => Ok(OrderAttribute::State),
            "valor" | "preco" | "preço" | "price" => Ok(OrderAttribute::Price),
            "empresa" | "enterprise" => Ok(OrderAttribute::Enterprise),
            _ => Err(DomainError::unknown_attribute(s)),
        }
    }
}
