/// Wrap a problem statement in the 8-step analysis template sent to the model.
pub fn build_resolution_prompt(problem: &str) -> String {
    format!(
        r#"
Resuelve el siguiente problema siguiendo estos 8 pasos de análisis lógico:

1. Identifique y clarifique el problema.
2. Analice el problema recopilando hechos e información.
3. Desarrolle soluciones alternativas.
4. Seleccione la mejor solución.
5. Diseñe un plan de acción.
6. Implemente la solución.
7. Describa brevemente cómo se evaluará la solución.
8. Evalúe la solución elegida mostrando una tabla visual y colorida con puntuaciones del 1 al 10 en los siguientes criterios:
   - ⚡ Eficiencia
   - 🚀 Rapidez
   - 🎯 Calidad

La tabla debe ser muy visual, usando emojis, bloques gráficos, barras de progreso o cualquier elemento que la haga clara, atractiva y fácil de entender.

Problema: {problem}
"#
    )
}
