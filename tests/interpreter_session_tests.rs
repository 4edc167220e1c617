// Whole session tests.  The interpreter prints into a buffer so the output of `.s`, `.w` and the
// error reports can be checked along with the final stack.

use minforth::lang::tokenizing::Cell;
use minforth::runtime::built_ins::base_words::register_base_words;
use minforth::runtime::interpreter::forth_interpreter::ForthInterpreter;
use minforth::runtime::interpreter::{
    CodeManagement, Interpreter, InterpreterStack, Mode, WordManagement,
};

fn new_interpreter() -> ForthInterpreter<Vec<u8>> {
    let mut interpreter = ForthInterpreter::with_output(Vec::new());
    register_base_words(&mut interpreter);
    interpreter
}

fn stack_of(interpreter: &ForthInterpreter<Vec<u8>>) -> Vec<Cell> {
    interpreter.stack().iter().copied().collect()
}

fn output_of(interpreter: &ForthInterpreter<Vec<u8>>) -> String {
    String::from_utf8(interpreter.writer().clone()).unwrap()
}

fn run(source: &str) -> ForthInterpreter<Vec<u8>> {
    let mut interpreter = new_interpreter();
    interpreter.process_source("<test>", source).unwrap();
    interpreter
}

const PRIMITIVE_LISTING: &str = "* PRIMITIVE \n\
                                 + PRIMITIVE \n\
                                 - PRIMITIVE \n\
                                 .s PRIMITIVE \n\
                                 .w PRIMITIVE \n\
                                 / PRIMITIVE \n\
                                 bye PRIMITIVE \n\
                                 drop PRIMITIVE \n\
                                 dup PRIMITIVE \n\
                                 over PRIMITIVE \n";

#[test]
fn print_stack_bottom_to_top() {
    let interpreter = run("1 2 3 .s");

    assert_eq!(output_of(&interpreter), "1 2 3 \n");
    assert_eq!(stack_of(&interpreter), vec![1, 2, 3]);
}

#[test]
fn print_empty_stack() {
    let interpreter = run(".s");
    assert_eq!(output_of(&interpreter), "\n");
}

#[test]
fn print_dictionary_of_primitives() {
    let interpreter = run(".w");
    assert_eq!(output_of(&interpreter), PRIMITIVE_LISTING);
}

#[test]
fn print_dictionary_with_composites() {
    let interpreter = run(": sq dup * ;\n.w");
    let expected = format!("{}sq COMPOSITE dup * \n", PRIMITIVE_LISTING);

    assert_eq!(output_of(&interpreter), expected);
}

#[test]
fn definition_then_use() {
    let interpreter = run(": sq dup * ;\n4 sq");

    assert_eq!(stack_of(&interpreter), vec![16]);
    assert_eq!(interpreter.mode(), Mode::Interpret);
    assert!(!interpreter.find_word("sq").unwrap().is_primitive());
}

#[test]
fn definition_spans_lines() {
    let mut interpreter = new_interpreter();

    interpreter.process_line(":").unwrap();
    assert_eq!(interpreter.mode(), Mode::Compile);

    interpreter.process_line("  sq dup").unwrap();
    interpreter.process_line("*").unwrap();
    assert_eq!(interpreter.mode(), Mode::Compile);
    assert!(interpreter.find_word("sq").is_none());

    interpreter.process_line("; 5 sq").unwrap();
    assert_eq!(interpreter.mode(), Mode::Interpret);
    assert_eq!(stack_of(&interpreter), vec![25]);
}

#[test]
fn redefinition_shadows_but_does_not_rewrite() {
    let interpreter = run(": double dup + ;\n\
                           : quad double double ;\n\
                           : double dup * ;\n\
                           3 quad 3 double");

    // quad keeps the adding double, new lookups get the multiplying one.
    assert_eq!(stack_of(&interpreter), vec![12, 9]);
    assert_eq!(output_of(&interpreter), "");
}

#[test]
fn redefining_a_primitive() {
    let interpreter = run(": square dup * ;\n: dup over ;\n3 square 1 2 dup");
    assert_eq!(stack_of(&interpreter), vec![9, 1, 2, 1]);
}

#[test]
fn failed_definition_is_discarded() {
    let interpreter = run(": broken nosuchword ;\nbroken");

    assert_eq!(
        output_of(&interpreter),
        "<test> (1, 10): Compilation failed: word nosuchword not found.\n\
         <test> (2, 1): Word broken not found.\n"
    );
    assert!(interpreter.find_word("broken").is_none());
    assert_eq!(interpreter.mode(), Mode::Interpret);
}

#[test]
fn failed_definition_discards_rest_of_line() {
    let interpreter = run("1 : broken nope 2 3\n4");

    assert_eq!(stack_of(&interpreter), vec![1, 4]);
    assert_eq!(
        output_of(&interpreter),
        "<test> (1, 12): Compilation failed: word nope not found.\n"
    );
}

#[test]
fn numbers_can_not_be_compiled() {
    let interpreter = run(": two 2 ;\ntwo");

    assert_eq!(
        output_of(&interpreter),
        "<test> (1, 7): Compilation failed: word 2 not found.\n\
         <test> (2, 1): Word two not found.\n"
    );
}

#[test]
fn comments_can_not_be_compiled() {
    let interpreter = run(": c ( x ) dup ;\n5 c");

    assert_eq!(
        output_of(&interpreter),
        "<test> (1, 5): Compilation failed: word ( not found.\n\
         <test> (2, 3): Word c not found.\n"
    );
    assert!(interpreter.find_word("c").is_none());
    assert_eq!(stack_of(&interpreter), vec![5]);
}

#[test]
fn invalid_utf8_does_not_end_the_session() {
    let mut interpreter = new_interpreter();
    let mut input: &[u8] = b"1 .s\n\xff ( caf\xe9 )\n2 .s\n";

    interpreter.process_reader("<test>", &mut input).unwrap();

    assert_eq!(
        output_of(&interpreter),
        "1 \n<test> (2, 1): Word \u{FFFD} not found.\n1 2 \n"
    );
    assert!(!interpreter.is_halted());
}

#[test]
fn unknown_words_do_not_stop_the_line() {
    let interpreter = run("1 nothing 2 .s");

    assert_eq!(
        output_of(&interpreter),
        "<test> (1, 3): Word nothing not found.\n1 2 \n"
    );
}

#[test]
fn failure_inside_composite_stops_it_without_rollback() {
    let interpreter = run(": bad drop drop dup ;\n 1 bad 5 .s");

    assert_eq!(
        output_of(&interpreter),
        "<test> (2, 4): Stack underflow.\n5 \n"
    );
    assert_eq!(stack_of(&interpreter), vec![5]);
}

#[test]
fn division_by_zero_inside_composite() {
    let interpreter = run(": div-then-dup / dup ;\n8 0 div-then-dup .s");

    assert_eq!(
        output_of(&interpreter),
        "<test> (2, 5): Division by zero.\n\n"
    );
}

#[test]
fn comments_are_skipped() {
    let interpreter = run("1 ( push 2 ) 3\n( whole line comment )\n4");
    assert_eq!(stack_of(&interpreter), vec![1, 3, 4]);
}

#[test]
fn unterminated_comment_ends_with_its_line() {
    let interpreter = run("1 ( no end 2\n3 )");

    // The second line is interpreted again, so the lone `)` is just an unknown word.
    assert_eq!(stack_of(&interpreter), vec![1, 3]);
    assert_eq!(output_of(&interpreter), "<test> (2, 3): Word ) not found.\n");
}

#[test]
fn bye_stops_the_session() {
    let interpreter = run("1 2 bye 3 .s\n4 .s");

    assert!(interpreter.is_halted());
    assert_eq!(stack_of(&interpreter), vec![1, 2]);
    assert_eq!(output_of(&interpreter), "");
}

#[test]
fn bye_inside_composite_stops_the_rest_of_it() {
    let interpreter = run(": stop dup bye drop ;\n7 stop drop");

    assert!(interpreter.is_halted());
    assert_eq!(stack_of(&interpreter), vec![7, 7]);
}

#[test]
fn word_names_are_not_validated() {
    let interpreter = run(": 5 dup ;\n: ; drop ;\n5");

    // Literals win over words in interpret mode, so the `5` word can never be reached.
    assert!(interpreter.find_word("5").is_some());
    assert!(interpreter.find_word(";").is_some());
    assert_eq!(stack_of(&interpreter), vec![5]);
}

#[test]
fn execute_word_named_reports_missing_words() {
    let mut interpreter = new_interpreter();

    interpreter.push(2);
    interpreter.execute_word_named("dup").unwrap();
    assert_eq!(stack_of(&interpreter), vec![2, 2]);

    let error = interpreter.execute_word_named("missing").unwrap_err();
    assert_eq!(error.to_string(), "Word missing not found.");
}

#[test]
fn locations_follow_the_source() {
    let mut interpreter = new_interpreter();

    interpreter.process_source("first.f", "\n\n   drop").unwrap();

    let location = interpreter.current_location();
    assert_eq!(location.path(), "first.f");
    assert_eq!((location.line(), location.column()), (3, 4));

    interpreter.process_source("second.f", "drop").unwrap();

    assert_eq!(
        output_of(&interpreter),
        "first.f (3, 4): Stack underflow.\nsecond.f (1, 1): Stack underflow.\n"
    );
}
