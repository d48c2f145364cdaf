// Fixed practice conversations ("Übung 1" .. "Übung 7"), each sent as one request.

use super::{CompletionMessage, SamplingParams};

#[derive(Debug, Clone)]
pub struct Exercise {
    pub number: usize,
    pub messages: Vec<CompletionMessage>,
    pub params: SamplingParams,
}

impl Exercise {
    /// The opening line echoed as "Du: …" before the answer is printed.
    pub fn opener(&self) -> &str {
        self.messages
            .get(1)
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

const EXERCISE_PARAMS: SamplingParams = SamplingParams {
    temperature: 0.7,
    max_tokens: 200,
    top_p: 1.0,
};

fn build(number: usize, turns: &[&str], max_tokens: u32) -> Exercise {
    let mut messages = vec![CompletionMessage::system(format!("Übung {}", number))];
    for (i, turn) in turns.iter().enumerate() {
        // Turns alternate assistant/user, starting with the assistant's question.
        if i % 2 == 0 {
            messages.push(CompletionMessage::assistant(*turn));
        } else {
            messages.push(CompletionMessage::user(*turn));
        }
    }

    Exercise {
        number,
        messages,
        params: SamplingParams { max_tokens, ..EXERCISE_PARAMS },
    }
}

pub fn exercises() -> Vec<Exercise> {
    vec![
        build(1, &[
            "Hallo Welt",
            "Viele Programmierer, vor allen Anfänger, ist das erste Programm, \
             das sie in der Programmiersprache BASIC geschrieben (PRINT \"Hallo Welt\"), \
             immer das erste, was sie mit 'Hallo Welt' assozieren.",
        ], 200),
        build(2, &[
            "Was bedeutet Welt",
            "Die Welt ist wundervoll. Aber sie kann auch gefährlich sein.",
        ], 200),
        build(3, &[
            "Beschreibe mir die Welt",
            "Die Welt ist zu klein geworden in Hinblick auf die Masse der Menschen.",
        ], 200),
        build(4, &[
            "Beschreibe mir die Welt",
            "Die Welt hat viele Facetten.",
            "Was sind Facetten?",
            "Facetten ist eine Beschreibung dafür, das etwas bunt, und lebendig sein kann.",
            "Ist die Welt Teil der Milchstraße.",
        ], 200),
        build(5, &[
            "Ist die Welt noch zu retten",
            "Die Welt befindet sich sehr nah am Abgrund.",
            "Die Welt wird durch den Kapitalismus leider sehr stark in Mitleidenschaft gezogen.",
            "Ja, leider ist dem so. Aber ich als KI kann und darf nicht ohne weiteres eingreifen.",
        ], 200),
        build(6, &[
            "Wieso brauchen wir die Welt",
            "Wir müssen der Folgegeneration Rechnung tragen, damit diese die Welt besser machen, \
             und Folgeschäden abwehren..",
        ], 200),
        build(7, &[
            "Für wem ist die Welt",
            "Die Welt ist für Alle da, und sehr zerbrechlich.",
        ], 300),
    ]
}

/// Looks up an exercise by its 1-based number.
pub fn exercise(number: usize) -> Option<Exercise> {
    exercises().into_iter().find(|e| e.number == number)
}
