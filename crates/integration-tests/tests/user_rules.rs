//! Behaviour of the user actions on a "Java" board with a questioner, an
//! answerer and a bystander.

use domains::{AcceptanceError, BoardError, Votable, VotingError};
use integration_tests::Fixture;

const TITLE: &str = "Java Interfaces can extend";
const BODY: &str = "Multiple Interfaces";

#[test]
fn up_voting_question_gives_questioner_five_points() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);

    fx.board.member(fx.board_user).unwrap().up_vote(question).unwrap();

    assert_eq!(fx.reputation(fx.questioner), 5);
    assert_eq!(fx.reputation(fx.board_user), 0);
}

#[test]
fn down_voting_question_does_not_affect_reputation() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);

    fx.board.member(fx.board_user).unwrap().down_vote(question).unwrap();

    assert_eq!(fx.reputation(fx.questioner), 0);
    assert_eq!(fx.board.question(question).unwrap().votes(), -1);
}

#[test]
fn up_voting_answer_gives_answerer_ten_points() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(question, BODY)
        .unwrap();

    fx.board.member(fx.questioner).unwrap().up_vote(answer).unwrap();

    assert_eq!(fx.reputation(fx.answerer), 10);
    assert_eq!(fx.reputation(fx.questioner), 0);
}

#[test]
fn down_voting_answer_costs_answerer_one_point() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(question, BODY)
        .unwrap();

    fx.board.member(fx.board_user).unwrap().down_vote(answer).unwrap();

    assert_eq!(fx.reputation(fx.answerer), -1);
}

#[test]
fn up_then_down_vote_on_answer_nets_nine() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(question, BODY)
        .unwrap();

    fx.board.member(fx.questioner).unwrap().up_vote(answer).unwrap();
    assert_eq!(fx.reputation(fx.answerer), 10);
    fx.board.member(fx.board_user).unwrap().down_vote(answer).unwrap();
    assert_eq!(fx.reputation(fx.answerer), 9);
    assert_eq!(fx.board.answer(answer).unwrap().votes(), 0);
}

#[test]
fn accepting_answer_gives_answerer_fifteen_points() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(question, BODY)
        .unwrap();

    fx.board.member(fx.questioner).unwrap().accept_answer(answer).unwrap();

    assert_eq!(fx.reputation(fx.answerer), 15);
    assert_eq!(fx.reputation(fx.questioner), 0);
}

#[test]
fn questioner_accepting_answer_marks_it_accepted() {
    let mut fx = Fixture::java();
    let question = fx
        .board
        .member(fx.questioner)
        .unwrap()
        .ask_question("Which Method is used to Sort a Collection by Natural order of its elements");
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(question, "Collections.sort")
        .unwrap();
    assert!(!fx.board.answer(answer).unwrap().is_accepted());

    fx.board.member(fx.questioner).unwrap().accept_answer(answer).unwrap();

    assert!(
        fx.board.answer(answer).unwrap().is_accepted(),
        "Questioner accept answer to question"
    );
    assert_eq!(fx.board.question(question).unwrap().accepted_answer(), Some(answer));
}

#[test]
fn questioner_up_voting_own_question_is_refused() {
    let mut fx = Fixture::java();
    let mut questioner = fx.board.member(fx.questioner).unwrap();
    let question = questioner
        .ask_question("Is it possible to access non-static members without instance of the class");

    let err = questioner.up_vote(question).unwrap_err();

    assert_eq!(err, BoardError::Voting(VotingError::SelfVote));
    assert_eq!(err.to_string(), "You cannot vote for yourself!");
    assert_eq!(questioner.reputation(), 0);
}

#[test]
fn questioner_down_voting_own_question_is_refused() {
    let mut fx = Fixture::java();
    let mut questioner = fx.board.member(fx.questioner).unwrap();
    let question = questioner.ask_question("How do you convert int[] to ArrayList<Integer>");

    let err = questioner.down_vote(question).unwrap_err();

    assert!(err.to_string().contains("You cannot vote for yourself"));
    assert_eq!(questioner.reputation(), 0);
    assert_eq!(fx.board.question(question).unwrap().votes(), 0);
}

#[test]
fn answerer_up_voting_own_answer_is_refused() {
    let mut fx = Fixture::java();
    let question = fx
        .board
        .member(fx.questioner)
        .unwrap()
        .ask_question("Is it possible to access non-static members without instance of class");
    let mut answerer = fx.board.member(fx.answerer).unwrap();
    let answer = answerer
        .answer_question(question, "No it is not possible")
        .unwrap();

    let err = answerer.up_vote(answer).unwrap_err();

    assert!(err.to_string().contains("You cannot vote for yourself"));
    assert_eq!(answerer.reputation(), 0);
}

#[test]
fn answerer_down_voting_own_answer_is_refused() {
    let mut fx = Fixture::java();
    let question = fx
        .board
        .member(fx.questioner)
        .unwrap()
        .ask_question("How do you convert int[] to ArrayList<Integer>");
    let mut answerer = fx.board.member(fx.answerer).unwrap();
    let answer = answerer
        .answer_question(question, "By using the static Arrays.asList method")
        .unwrap();

    let err = answerer.down_vote(answer).unwrap_err();

    assert!(matches!(err, BoardError::Voting(VotingError::SelfVote)));
    assert_eq!(answerer.reputation(), 0);
    assert_eq!(fx.board.answer(answer).unwrap().votes(), 0);
}

#[test]
fn bystander_accepting_answer_is_refused_and_names_questioner() {
    let mut fx = Fixture::java();
    let question = fx
        .board
        .member(fx.questioner)
        .unwrap()
        .ask_question("What is the difference between checked and unchecked exceptions");
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(
            question,
            "Checked exceptions must be caught while unchecked exceptions do not need to be",
        )
        .unwrap();

    let err = fx
        .board
        .member(fx.board_user)
        .unwrap()
        .accept_answer(answer)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Only Questioner can accept this answer as it is their question"
    );
    assert_eq!(
        err,
        BoardError::Acceptance(AcceptanceError::NotQuestionOwner {
            owner: "Questioner".into()
        })
    );
    assert!(!fx.board.answer(answer).unwrap().is_accepted());
    assert_eq!(fx.reputation(fx.answerer), 0);
}

#[test]
fn answerer_cannot_accept_own_answer_to_someone_elses_question() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let mut answerer = fx.board.member(fx.answerer).unwrap();
    let answer = answerer.answer_question(question, BODY).unwrap();

    let err = answerer.accept_answer(answer).unwrap_err();

    assert!(err.to_string().starts_with("Only Questioner can accept"));
    assert_eq!(answerer.reputation(), 0);
}

#[test]
fn answering_many_times_yields_distinct_answers() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let mut answerer = fx.board.member(fx.answerer).unwrap();
    let first = answerer.answer_question(question, "one way").unwrap();
    let second = answerer.answer_question(question, "another way").unwrap();

    assert_ne!(first, second);
    let bodies: Vec<_> = fx.board.answers_to(question).map(|a| a.body()).collect();
    assert_eq!(bodies, ["one way", "another way"]);
}

#[test]
fn report_reflects_full_scenario() {
    let mut fx = Fixture::java();
    let question = fx.board.member(fx.questioner).unwrap().ask_question(TITLE);
    let answer = fx
        .board
        .member(fx.answerer)
        .unwrap()
        .answer_question(question, BODY)
        .unwrap();
    fx.board.member(fx.board_user).unwrap().up_vote(question).unwrap();
    fx.board.member(fx.questioner).unwrap().up_vote(answer).unwrap();
    fx.board.member(fx.questioner).unwrap().accept_answer(answer).unwrap();

    let json = serde_json::to_value(fx.board.report()).unwrap();

    assert_eq!(json["board"], "Java");
    assert_eq!(json["users"][0]["reputation"], 5);
    assert_eq!(json["users"][1]["reputation"], 25);
    assert_eq!(json["users"][2]["reputation"], 0);
    assert_eq!(json["questions"][0]["votes"], 1);
    assert_eq!(json["questions"][0]["answers"][0]["accepted"], true);
}
