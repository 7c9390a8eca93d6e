use super::{tokenize, Operator};

/// Converted expression plus the explanation of every stack move
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Conversion {
    /// Space-separated tokens in the target notation
    pub output: String,
    /// One entry per input token, then one per operator drained at the end
    pub steps: Vec<String>,
}

/// Convert infix to postfix
///
/// An operator first pops every stacked operator that binds tighter, or
/// equally tight unless the incoming operator is right-associative. A `)`
/// pops back to the matching `(`, or empties the stack if there is none.
/// Leftover entries, unmatched `(` included, are drained to the output.
pub fn infix_to_postfix(expr: &str) -> Conversion {
    shunt(&tokenize(expr))
}

/// Convert infix to prefix
///
/// The token order is reversed with parentheses swapped, converted to
/// postfix, and the output reversed again. Steps are those of the postfix
/// pass over the mirrored tokens.
pub fn infix_to_prefix(expr: &str) -> Conversion {
    let mirrored: Vec<String> = tokenize(expr)
        .into_iter()
        .rev()
        .map(|token| match token.as_str() {
            "(" => ")".to_string(),
            ")" => "(".to_string(),
            _ => token,
        })
        .collect();

    let Conversion { output, steps } = shunt(&mirrored);
    let output = output.split_whitespace().rev().collect::<Vec<_>>().join(" ");
    let steps = steps
        .into_iter()
        .map(|step| step.replace("postfix", "prefix"))
        .collect();
    Conversion { output, steps }
}

/// True if the stacked `top` must be output before `incoming` is pushed
fn pops_before(top: &str, incoming: Operator) -> bool {
    Operator::from_token(top).is_some_and(|top| {
        top.precedence() > incoming.precedence()
            || (top.precedence() == incoming.precedence() && !incoming.is_right_associative())
    })
}

fn shunt(tokens: &[String]) -> Conversion {
    let mut output: Vec<&str> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<&str> = Vec::new();
    let mut steps = Vec::with_capacity(tokens.len());

    for token in tokens.iter().map(String::as_str) {
        match token {
            "(" => stack.push(token),
            ")" => {
                while let Some(top) = stack.pop() {
                    if top == "(" {
                        break;
                    }
                    output.push(top);
                }
            }
            _ => match Operator::from_token(token) {
                Some(op) => {
                    while let Some(&top) = stack.last() {
                        if !pops_before(top, op) {
                            break;
                        }
                        output.push(top);
                        stack.pop();
                    }
                    stack.push(token);
                }
                None => output.push(token),
            },
        }
        steps.push(format!(
            "Token: {token}\nOutput: {}\nStack: {}",
            output.join(" "),
            stack.join(" ")
        ));
    }

    while let Some(top) = stack.pop() {
        output.push(top);
        steps.push(format!(
            "Drain stack\nOutput: {}\nStack: {}",
            output.join(" "),
            stack.join(" ")
        ));
    }

    Conversion {
        output: output.join(" "),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postfix_steps() {
        let conv = infix_to_postfix("a+b*c");
        assert_eq!(conv.output, "a b c * +");
        assert_eq!(
            conv.steps,
            vec![
                "Token: a\nOutput: a\nStack: ",
                "Token: +\nOutput: a\nStack: +",
                "Token: b\nOutput: a b\nStack: +",
                "Token: *\nOutput: a b\nStack: + *",
                "Token: c\nOutput: a b c\nStack: + *",
                "Drain stack\nOutput: a b c *\nStack: +",
                "Drain stack\nOutput: a b c * +\nStack: ",
            ]
        );
    }

    #[test]
    fn test_associativity() {
        assert_eq!(infix_to_postfix("a-b-c").output, "a b - c -");
        assert_eq!(infix_to_postfix("a^b^c").output, "a b c ^ ^");
    }

    #[test]
    fn test_unbalanced_parentheses() {
        // Unmatched ')' empties the stack, unmatched '(' is drained verbatim
        assert_eq!(infix_to_postfix("a+b)*c").output, "a b + c *");
        assert_eq!(infix_to_postfix("(a+b").output, "a b + (");
    }

    #[test]
    fn test_prefix() {
        assert_eq!(infix_to_prefix("(A+B)*(C-D)").output, "* + A B - C D");
        let conv = infix_to_prefix("a+b");
        assert_eq!(conv.output, "+ a b");
        // Steps describe the mirrored token stream
        assert_eq!(conv.steps[0], "Token: b\nOutput: b\nStack: ");
        assert_eq!(conv.steps.len(), 4);
    }

    #[test]
    fn test_empty_expression() {
        let conv = infix_to_postfix("   ");
        assert_eq!(conv.output, "");
        assert!(conv.steps.is_empty());
    }
}
