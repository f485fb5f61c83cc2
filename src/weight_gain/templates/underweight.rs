use crate::models::enums::{Trimester::*, WeightGainStatus::*};

use super::{entry, TemplateEntry};

pub(super) const ENTRIES: &[TemplateEntry] = &[
    // ── Trimester 1 ──
    entry(First, Adequate, "bp_t1_adequate",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Deve ser recomendado um ganho de peso entre ${meta_min_1tri} e ${meta_max_1tri} kg até as 13 semanas de idade gestacional."),
    entry(First, MaxReached, "bp_t1_max",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Portanto, a paciente já ganhou o peso máximo (1,2kg) recomendado para o período.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de gravidez."),
    entry(First, MaxReachedNext, "bp_t1_max_next",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Portanto, a paciente já ganhou o peso máximo (7,2kg) recomendado até as 27 semanas.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(First, Loss, "bp_t1_loss",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         A perda de peso não é aceitável para pacientes que engravidaram com baixo peso.\n\
         Avalie o motivo dessa perda e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_1tri} a ${meta_max_1tri} kg até as 13 semanas de idade gestacional."),
    entry(First, Below, "bp_t1_below",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional.\n\
         Deve ser recomendado um ganho de peso entre ${meta_min_1tri} e ${meta_max_1tri} kg até as 13 semanas de idade gestacional."),
    entry(First, TotalMaxReached, "bp_t1_max_total",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Mulheres com baixo peso pré-gestacional devem ter um ganho máximo de ${total_max} kg na gestação.\n\
         Assim, deve ser recomendado um ganho de ${taxa_semanal} gramas/semana até o final da gravidez."),
    // ── Trimester 2 ──
    entry(Second, Adequate, "bp_t2_adequate",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Deve ser recomendado um ganho de peso entre ${meta_min_2tri} e ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, MaxReached, "bp_t2_max",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Portanto, a paciente já ganhou o peso máximo (7,2kg) recomendado para o período.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(Second, Loss, "bp_t2_loss",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         A perda de peso não é aceitável para pacientes que engravidaram com baixo peso.\n\
         Avalie o motivo dessa perda, investigue a presença de hiperêmese gravídica e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, Below, "bp_t2_below",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional, onde a paciente deveria ter ganho no mínimo ${meta_min_2tri} kg.\n\
         Avalie o motivo desse baixo ganho de peso e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, Above, "bp_t2_above",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está acima do recomendado para a idade gestacional.\n\
         Avalie hábitos alimentares e nível de atividade física.\n\
         Deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, TotalMaxReached, "bp_t2_max_total",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Mulheres com baixo peso pré-gestacional devem ter um ganho máximo de ${total_max} kg na gestação.\n\
         Assim, deve ser recomendado um ganho de ${taxa_semanal} gramas/semana até o final da gravidez."),
    // ── Trimester 3 ──
    entry(Third, Adequate, "bp_t3_adequate",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Deve ser recomendado um ganho de peso entre ${meta_min_3tri} e ${meta_max_3tri} kg até o final da gestação."),
    entry(Third, TotalMaxReached, "bp_t3_max_total",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Mulheres com baixo peso pré-gestacional devem ter um ganho máximo de ${total_max} kg na gestação.\n\
         Assim, deve ser recomendado um ganho de ${taxa_semanal} gramas/semana até o final da gravidez."),
    entry(Third, Loss, "bp_t3_loss",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         A perda de peso não é aceitável para pacientes que engravidaram com baixo peso.\n\
         Avalie o motivo dessa perda, investigue a presença de hiperêmese gravídica e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(Third, Below, "bp_t3_below",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional.\n\
         Deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(Third, BelowSevere, "bp_t3_below_severe",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional, onde a paciente deveria ter ganho no mínimo 5,6 kg.\n\
         Avalie o motivo desse baixo ganho de peso e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
];
