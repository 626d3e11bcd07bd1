#[derive(Clone, Debug, PartialEq)]
pub struct NumericAttribute {
    pub name: String,
}

impl NumericAttribute {
    pub fn new(name: String) -> NumericAttribute {
        NumericAttribute { name }
    }
}
