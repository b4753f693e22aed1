pub const MAX_FIELD_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Operator,
    Password,
}

/// Sign-on form. Contents are never checked; submitting always logs in.
#[derive(Debug, Default)]
pub struct LoginForm {
    operator: String,
    password: String,
    focus: Field,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }

    pub fn push(&mut self, c: char) {
        let field = self.field_mut();
        if field.chars().count() < MAX_FIELD_LEN {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Field::Operator => Field::Password,
            Field::Password => Field::Operator,
        };
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Operator => &mut self.operator,
            Field::Password => &mut self.password,
        }
    }
}
