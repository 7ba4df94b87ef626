use std::fmt;
use std::sync::Arc;
use liquid_core::{Expression, Runtime, ValueView, Value, Result as LiquidResult};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::{Error, FilterReflection};

use crate::template::helpers::Helper;

/// Exposes a registered [`Helper`] as a Liquid filter under its name
#[derive(Debug, Clone)]
pub struct HelperFilterParser {
    name: String,
    helper: Arc<dyn Helper>,
}

impl HelperFilterParser {
    pub fn new(name: &str, helper: Arc<dyn Helper>) -> Self {
        HelperFilterParser { name: name.to_string(), helper }
    }
}

impl FilterReflection for HelperFilterParser {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "User-defined site helper"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for HelperFilterParser {
    fn parse(&self, mut arguments: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        if arguments.keyword.next().is_some() {
            return Err(Error::with_msg(format!(
                "helper `{}` only takes positional arguments",
                self.name
            )));
        }

        Ok(Box::new(HelperFilter {
            name: self.name.clone(),
            helper: Arc::clone(&self.helper),
            args: arguments.positional.collect(),
        }))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}

#[derive(Debug)]
struct HelperFilter {
    name: String,
    helper: Arc<dyn Helper>,
    args: Vec<Expression>,
}

impl liquid_core::Filter for HelperFilter {
    fn evaluate(&self, input: &dyn ValueView, runtime: &dyn Runtime) -> LiquidResult<Value> {
        let mut args = Vec::with_capacity(self.args.len());
        for expr in &self.args {
            let value = expr.evaluate(runtime)?;
            args.push(value.to_kstr().as_str().to_string());
        }

        let input = input.to_kstr();
        let output = self
            .helper
            .call(input.as_str(), &args)
            .map_err(|e| Error::with_msg(e.to_string()))?;

        Ok(Value::scalar(output))
    }
}

impl fmt::Display for HelperFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
