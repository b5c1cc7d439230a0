//! signing/request.rs
//! Immutable request value assembled before signing.
//!
//! Field order is part of the type: `RequestBuilder::field` appends, nothing
//! reorders, and the same order drives both the signature and the JSON body.

use std::fmt;

use serde_json::{Map, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }

    /// Methods whose structured body is part of the signature.
    pub fn has_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready for signing: method, path, query and ordered body fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    fields: Vec<(String, Value)>,
    authenticated: bool,
}

impl ApiRequest {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Whether the endpoint requires an authorized session.
    pub fn requires_auth(&self) -> bool {
        self.authenticated
    }

    /// JSON body in field order. `None` for GET; `{}` for an empty POST/PUT.
    pub fn json_body(&self) -> Option<Vec<u8>> {
        if !self.method.has_body() {
            return None;
        }
        let mut map = Map::with_capacity(self.fields.len());
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.clone());
        }
        Some(Value::Object(map).to_string().into_bytes())
    }
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    inner: ApiRequest,
}

impl RequestBuilder {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            inner: ApiRequest {
                method,
                path: path.into(),
                query: Vec::new(),
                fields: Vec::new(),
                authenticated: false,
            },
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Append a query parameter (GET). Not signed.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.inner.query.push((name.into(), value.to_string()));
        self
    }

    /// Append a body field. A repeated name replaces the earlier value in place,
    /// keeping its original position.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.inner.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.inner.fields.push((name, value)),
        }
        self
    }

    /// Append a field whose value is JSON null.
    pub fn null_field(self, name: impl Into<String>) -> Self {
        self.field(name, Value::Null)
    }

    pub fn authenticated(mut self) -> Self {
        self.inner.authenticated = true;
        self
    }

    pub fn build(self) -> ApiRequest {
        self.inner
    }
}
