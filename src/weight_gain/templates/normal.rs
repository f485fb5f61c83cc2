use crate::models::enums::{Trimester::*, WeightGainStatus::*};

use super::{entry, TemplateEntry};

pub(super) const ENTRIES: &[TemplateEntry] = &[
    // ── Trimester 1 ──
    entry(First, Adequate, "eut_t1_adequate",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Deve ser recomendado um ganho de no máximo ${meta_max_1tri} kg até as 13 semanas de idade gestacional."),
    entry(First, MaxReached, "eut_t1_max",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Portanto, a paciente já ganhou o peso máximo (0,7 kg) recomendado para o período.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de gravidez."),
    entry(First, MaxReachedNext, "eut_t1_max_next",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Portanto, a paciente já ganhou o peso máximo (6,3 kg) recomendado para o período.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(First, LossAcceptable, "eut_t1_loss_ok",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         A perda de até 1,8 kg é aceitável no primeiro trimestre.\n\
         Avalie o motivo dessa perda e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_1tri} a ${meta_max_1tri} kg até as 13 semanas de idade gestacional."),
    entry(First, LossExcessive, "eut_t1_loss_excessive",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         A perda de peso foi excessiva. É aceitável uma perda de no máximo 1,8 kg para pacientes que engravidaram com eutrofia.\n\
         Avalie o motivo dessa perda e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_1tri} a ${meta_max_1tri} kg até as 13 semanas de idade gestacional."),
    entry(First, TotalMaxReached, "eut_t1_max_total",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Mulheres com eutrofia pré-gestacional devem ter um ganho máximo de ${total_max} kg na gestação.\n\
         Assim, deve ser recomendado um ganho de ${taxa_semanal} gramas/semana até o final da gravidez."),
    // ── Trimester 2 ──
    entry(Second, Adequate, "eut_t2_adequate",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Deve ser recomendado um ganho de peso entre ${meta_min_2tri} e ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, MaxReached, "eut_t2_max",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Portanto, a paciente já ganhou o peso máximo (6,3 kg) recomendado para o período.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(Second, LossExcessive, "eut_t2_loss_excessive",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         A perda de peso foi excessiva. É aceitável uma perda de no máximo 1,8 kg para pacientes que engravidaram com eutrofia.\n\
         Avalie o motivo dessa perda, investigue a presença de hiperêmese gravídica e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, LossAcceptable, "eut_t2_loss_ok",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Essa perda de peso é aceitável no primeiro trimestre. O ganho de peso é recomendado a partir das 14 semanas de idade gestacional.\n\
         Assim, deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, Below, "eut_t2_below",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional.\n\
         Avalie o motivo desse baixo ganho de peso e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de gravidez."),
    entry(Second, Above, "eut_t2_above",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está acima do recomendado para a idade gestacional.\n\
         Avalie hábitos alimentares e nível de atividade física.\n\
         Deve ser recomendado um ganho de ${meta_min_2tri} a ${meta_max_2tri} kg até as 27 semanas de idade gestacional."),
    entry(Second, TotalMaxReached, "eut_t2_max_total",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Mulheres com eutrofia pré-gestacional devem ter um ganho máximo de ${total_max} kg na gestação.\n\
         Assim, deve ser recomendado um ganho de ${taxa_semanal} gramas/semana até o final da gravidez."),
    // ── Trimester 3 ──
    entry(Third, Adequate, "eut_t3_adequate",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Deve ser orientado um ganho de peso entre ${meta_min_3tri} e ${meta_max_3tri} kg até o final da gestação."),
    entry(Third, TotalMaxReached, "eut_t3_max_total",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Mulheres com eutrofia pré-gestacional devem ter um ganho máximo de ${total_max} kg na gestação.\n\
         Assim, deve ser recomendado um ganho de ${taxa_semanal} gramas/semana até o final da gravidez."),
    entry(Third, Below, "eut_t3_below",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional.\n\
         Deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(Third, BelowSevere, "eut_t3_below_severe",
        "O ganho de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Esse ganho está abaixo do recomendado para a idade gestacional, onde a paciente deveria ter ganho no mínimo 3,1 kg.\n\
         Avalie o motivo desse baixo ganho de peso e defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
    entry(Third, Loss, "eut_t3_loss",
        "A perda de peso até a semana ${semana} foi de ${ganho} kg.\n\
         Até esse momento de gestação, a paciente deveria ter ganho no mínimo 3,1 kg.\n\
         Avalie o motivo dessa perda de peso até o momento atual. Se sintomas de náuseas e vômitos, investigue hiperêmese gravídica.\n\
         Defina uma conduta para resolução do quadro.\n\
         Deve ser recomendado um ganho de ${meta_min_3tri} a ${meta_max_3tri} kg até o final da gravidez."),
];
