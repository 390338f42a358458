//! OData query parameters and per-request configuration.
//!
//! Each verb accepts a different subset of the OData system query options,
//! so each subset is its own type. They all render into template variables
//! named the way the request templates spell them (`%24filter`, ...);
//! variables a template does not mention are simply not emitted.

use reqwest::header::HeaderMap;

use crate::uri_template::TemplateValue;

/// Something that contributes query variables to a request template.
pub trait QueryParameters {
    /// Template variable name/value pairs for every option that is set.
    fn to_template_vars(&self) -> Vec<(&'static str, TemplateValue)>;
}

/// No query options.
impl QueryParameters for () {
    fn to_template_vars(&self) -> Vec<(&'static str, TemplateValue)> {
        Vec::new()
    }
}

fn push_list(vars: &mut Vec<(&'static str, TemplateValue)>, name: &'static str, list: &[String]) {
    if !list.is_empty() {
        vars.push((name, TemplateValue::List(list.to_vec())));
    }
}

fn push_text(vars: &mut Vec<(&'static str, TemplateValue)>, name: &'static str, text: &Option<String>) {
    if let Some(text) = text {
        vars.push((name, TemplateValue::Text(text.clone())));
    }
}

fn push_display<T: ToString>(
    vars: &mut Vec<(&'static str, TemplateValue)>,
    name: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        vars.push((name, TemplateValue::Text(value.to_string())));
    }
}

/// Options for listing a collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// `$count`: include `@odata.count` in the response.
    pub count: Option<bool>,
    /// `$expand`: related entities to inline.
    pub expand: Vec<String>,
    /// `$filter`: OData filter expression.
    pub filter: Option<String>,
    /// `$orderby`: sort clauses, e.g. `displayName desc`.
    pub orderby: Vec<String>,
    /// `$search`: free-text search expression.
    pub search: Option<String>,
    /// `$select`: properties to return.
    pub select: Vec<String>,
    /// `$skip`: number of items to skip.
    pub skip: Option<u32>,
    /// `$top`: page size.
    pub top: Option<u32>,
}

impl QueryParameters for ListQuery {
    fn to_template_vars(&self) -> Vec<(&'static str, TemplateValue)> {
        let mut vars = Vec::new();
        push_display(&mut vars, "%24count", self.count);
        push_list(&mut vars, "%24expand", &self.expand);
        push_text(&mut vars, "%24filter", &self.filter);
        push_list(&mut vars, "%24orderby", &self.orderby);
        push_text(&mut vars, "%24search", &self.search);
        push_list(&mut vars, "%24select", &self.select);
        push_display(&mut vars, "%24skip", self.skip);
        push_display(&mut vars, "%24top", self.top);
        vars
    }
}

/// Options for reading a single entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    /// `$expand`: related entities to inline.
    pub expand: Vec<String>,
    /// `$select`: properties to return.
    pub select: Vec<String>,
}

impl QueryParameters for ItemQuery {
    fn to_template_vars(&self) -> Vec<(&'static str, TemplateValue)> {
        let mut vars = Vec::new();
        push_list(&mut vars, "%24expand", &self.expand);
        push_list(&mut vars, "%24select", &self.select);
        vars
    }
}

/// Options for `/$count`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountQuery {
    /// `$filter`: OData filter expression.
    pub filter: Option<String>,
    /// `$search`: free-text search expression.
    pub search: Option<String>,
}

impl QueryParameters for CountQuery {
    fn to_template_vars(&self) -> Vec<(&'static str, TemplateValue)> {
        let mut vars = Vec::new();
        push_text(&mut vars, "%24filter", &self.filter);
        push_text(&mut vars, "%24search", &self.search);
        vars
    }
}

/// Options for bound functions returning collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionQuery {
    pub count: Option<bool>,
    pub filter: Option<String>,
    pub search: Option<String>,
    pub skip: Option<u32>,
    pub top: Option<u32>,
}

impl QueryParameters for FunctionQuery {
    fn to_template_vars(&self) -> Vec<(&'static str, TemplateValue)> {
        let mut vars = Vec::new();
        push_display(&mut vars, "%24count", self.count);
        push_text(&mut vars, "%24filter", &self.filter);
        push_text(&mut vars, "%24search", &self.search);
        push_display(&mut vars, "%24skip", self.skip);
        push_display(&mut vars, "%24top", self.top);
        vars
    }
}

/// Headers and query options for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestConfiguration<Q = ()> {
    /// Extra request headers, e.g. `ConsistencyLevel: eventual`.
    pub headers: HeaderMap,
    /// Query options for the verb.
    pub query: Q,
}

impl<Q> RequestConfiguration<Q> {
    /// Configuration carrying only query options.
    pub fn with_query(query: Q) -> Self {
        RequestConfiguration {
            headers: HeaderMap::new(),
            query,
        }
    }
}
