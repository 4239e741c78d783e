// Integration tests for the JavaScript-to-Python translator

use unbrace::translate;

// === SINGLE STATEMENTS ===

#[test]
fn arithmetic_declaration() {
    assert_eq!(translate("let x = 5 + 3;").unwrap(), "x = (5.0 + 3.0)");
}

#[test]
fn print_with_string_and_identifier() {
    assert_eq!(
        translate(r#"console.log("hi", x);"#).unwrap(),
        r#"print("hi", x)"#
    );
}

#[test]
fn function_declaration() {
    assert_eq!(
        translate("function add(a, b) { return a + b; }").unwrap(),
        "def add(a, b):\n    return (a + b)"
    );
}

#[test]
fn if_else() {
    assert_eq!(
        translate("if (x > 1) { console.log(x); } else { console.log(0); }")
            .unwrap(),
        "if (x > 1.0):\n    print(x)\nelse:\n    print(0.0)"
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        translate("while (x < 3) { x = x + 1; }").unwrap(),
        "while (x < 3.0):\n    x = (x + 1.0)"
    );
}

#[test]
fn chained_assignment() {
    assert_eq!(translate("a = b = 5;").unwrap(), "a = b = 5.0");
}

#[test]
fn call_as_expression_statement() {
    assert_eq!(translate("f(1, 2);").unwrap(), "f(1.0, 2.0)");
}

// === LITERAL RENDERING ===

#[test]
fn numbers_render_python_style() {
    assert_eq!(
        translate("let a = 5; let b = 2.5;").unwrap(),
        "a = 5.0\nb = 2.5"
    );
}

#[test]
fn string_escapes_round_trip() {
    assert_eq!(translate(r#"let s = "a\nb";"#).unwrap(), r#"s = "a\nb""#);
    assert_eq!(
        translate(r#"let s = "tab\there";"#).unwrap(),
        r#"s = "tab\there""#
    );
}

#[test]
fn single_quoted_strings_become_double_quoted() {
    assert_eq!(translate("let s = 'single';").unwrap(), r#"s = "single""#);
    assert_eq!(
        translate(r#"let s = 'say "hi"';"#).unwrap(),
        r#"s = "say \"hi\"""#
    );
}

// === BLOCKS AND NESTING ===

#[test]
fn empty_blocks_render_pass() {
    assert_eq!(translate("function f() {}").unwrap(), "def f():\n    pass");
    assert_eq!(translate("while (x) {}").unwrap(), "while x:\n    pass");
    assert_eq!(
        translate("if (x) {} else {}").unwrap(),
        "if x:\n    pass\nelse:\n    pass"
    );
}

#[test]
fn nested_blocks_compound_indentation() {
    let source = r#"
        function count(n) {
            let i = 0;
            while (i < n) {
                if (i == 2) {
                    console.log("two");
                } else {
                    console.log(i);
                }
                i = i + 1;
            }
            return i;
        }
    "#;

    let expected = [
        "def count(n):",
        "    i = 0.0",
        "    while (i < n):",
        "        if (i == 2.0):",
        "            print(\"two\")",
        "        else:",
        "            print(i)",
        "        i = (i + 1.0)",
        "    return i",
    ]
    .join("\n");

    assert_eq!(translate(source).unwrap(), expected);
}

#[test]
fn multi_statement_program() {
    let source = r#"
        function double(x) {
            return x * 2;
        }

        let y = double(21);
        console.log("y =", y);
    "#;

    assert_eq!(
        translate(source).unwrap(),
        "def double(x):\n    return (x * 2.0)\ny = double(21.0)\nprint(\"y =\", y)"
    );
}

// === INPUT SHAPES ===

#[test]
fn empty_source_renders_empty() {
    assert_eq!(translate("").unwrap(), "");
    assert_eq!(translate("\n\n\n").unwrap(), "");
}

#[test]
fn crlf_line_endings_are_accepted() {
    assert_eq!(
        translate("let x = 1;\r\nlet y = 2;\r\n").unwrap(),
        "x = 1.0\ny = 2.0"
    );
}

#[test]
fn declaration_keywords_are_interchangeable_in_output() {
    assert_eq!(
        translate("let a = 1;\nconst b = 2;\nvar c = 3;").unwrap(),
        "a = 1.0\nb = 2.0\nc = 3.0"
    );
}

#[test]
fn keywords_usable_as_plain_names() {
    assert_eq!(translate("let let = 2;").unwrap(), "let = 2.0");
}

// === DEMO PROGRAMS ===

#[test]
fn greet_demo_translates() {
    let source =
        std::fs::read_to_string("demos/greet.js").expect("demo missing");
    let python = translate(&source).expect("translation failed");

    assert!(python.contains("def greet(name):"));
    assert!(python.contains("    if (name == \"world\"):"));
    assert!(python.contains("        print(\"hello, world\")"));
    assert!(python.contains("who = \"world\""));
    assert!(python.contains("greet(who)"));
}

#[test]
fn fib_demo_translates() {
    let source =
        std::fs::read_to_string("demos/fib.js").expect("demo missing");
    let python = translate(&source).expect("translation failed");

    assert!(python.contains("def fib(n):"));
    assert!(python.contains("    while (i < n):"));
    assert!(python.contains("        t = (a + b)"));
    assert!(python.contains("    return a"));
    assert!(python.contains("print(\"fib(10) =\", fib(10.0))"));
}
