mod issue_validator;
