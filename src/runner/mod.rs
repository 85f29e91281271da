pub mod biset;
pub mod sets;
pub mod state;
pub mod timer;

pub use state::{CompletedRun, Runner, SetStatus};

#[cfg(test)]
pub(crate) mod testutil {
    use crate::models::{
        EnduranceParams, ExerciseParams, ExerciseRef, SessionExercise, StrengthParams,
        TrainingSession,
    };
    use crate::types::Modality;

    pub fn session_of(exercises: Vec<SessionExercise>) -> TrainingSession {
        TrainingSession {
            id: 99,
            plan_id: 1,
            student_id: 7,
            name: "Treino A".to_string(),
            sequence: Some(1),
            main_type: Some("MUSCULACAO".to_string()),
            notes: None,
            exercises,
        }
    }

    /// Exercise-definition ids are derived as `100 + id` so tests can refer
    /// to them without extra plumbing.
    pub fn strength_exercise_with<F>(id: i64, order: i64, build: F) -> SessionExercise
    where
        F: FnOnce(&mut StrengthParams),
    {
        let mut params = StrengthParams::default();
        build(&mut params);
        SessionExercise {
            id,
            order,
            notes: None,
            exercise: ExerciseRef {
                id: 100 + id,
                name: format!("Exercicio {id}"),
                modality: Modality::Musculacao,
            },
            params: ExerciseParams::Strength(params),
        }
    }

    pub fn strength_exercise(id: i64, order: i64, biset_group: Option<&str>) -> SessionExercise {
        strength_exercise_with(id, order, |p| {
            p.biset_group = biset_group.map(str::to_string);
        })
    }

    pub fn endurance_exercise(id: i64, order: i64) -> SessionExercise {
        SessionExercise {
            id,
            order,
            notes: None,
            exercise: ExerciseRef {
                id: 100 + id,
                name: format!("Corrida {id}"),
                modality: Modality::Corrida,
            },
            params: ExerciseParams::Endurance(EnduranceParams::default()),
        }
    }
}
